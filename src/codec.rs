//! The string form of a [FuzzyDate]: `YYYY[-MM[-DD[THH[:MM[:SS[.mmm]]]]]]`.
//!
//! Only the set fields are written, so the string is as precise as the value. Years are
//! zero-padded to at least 4 digits (`0042`, `12345`); negative years put the sign before the
//! padded digits (`-0042`, `-100000`). Every other field has a fixed width, which keeps strings of
//! non-negative years of equal length sorting chronologically.

use crate::{
    date::{FuzzyDate, FuzzyDateOptions},
    error::FuzzyDateError,
};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static FUZZY_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(-?[0-9]+)",
        r"(?:-([0-9]{2})",
        r"(?:-([0-9]{2})",
        r"(?:T([0-9]{2})",
        r"(?::([0-9]{2})",
        r"(?::([0-9]{2})",
        r"(?:\.([0-9]{3}))?",
        r")?)?)?)?)?$",
    ))
    .expect("fuzzy date pattern should compile")
});

pub(crate) fn write_year(f: &mut fmt::Formatter<'_>, year: i32) -> fmt::Result {
    if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())
    } else {
        write!(f, "{:04}", year)
    }
}

fn parse_component<T: FromStr>(text: &str) -> Result<T, FuzzyDateError> {
    text.parse().map_err(|_| {
        debug!(component = text, "fuzzy date component is not an integer");
        FuzzyDateError::invalid_format()
    })
}

impl FuzzyDate {
    /// Parses a string written by [`FuzzyDate::to_string`](ToString::to_string) back into a
    /// [FuzzyDate]. Same as [`str::parse`].
    ///
    /// # Errors
    ///
    /// - [`FuzzyDateError::Deserialization`] if the string doesn't have the expected shape, or a
    ///   number in it doesn't fit.
    /// - [`FuzzyDateError::Calendar`] if the string is well-formed but isn't a real date, like
    ///   `2023-02-30`.
    pub fn parse(text: &str) -> Result<Self, FuzzyDateError> {
        let captures = FUZZY_DATE_PATTERN.captures(text).ok_or_else(|| {
            debug!(input = text, "string does not match fuzzy date format");
            FuzzyDateError::invalid_format()
        })?;
        let field = |idx: usize| {
            captures
                .get(idx)
                .map(|m| parse_component::<u32>(m.as_str()))
                .transpose()
        };

        let options = FuzzyDateOptions {
            year: parse_component(&captures[1])?,
            month: field(2)?,
            day: field(3)?,
            hour: field(4)?,
            minute: field(5)?,
            second: field(6)?,
            millisecond: field(7)?,
        };

        Self::new(options)
    }
}

impl FromStr for FuzzyDate {
    type Err = FuzzyDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for FuzzyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.year())?;

        let rest = [
            (self.month(), "-", 2usize),
            (self.day(), "-", 2),
            (self.hour(), "T", 2),
            (self.minute(), ":", 2),
            (self.second(), ":", 2),
            (self.millisecond(), ".", 3),
        ];
        // fields are always set as a prefix, so stop at the first unset one
        for (value, separator, width) in rest.into_iter().map_while(|(v, s, w)| Some((v?, s, w))) {
            write!(f, "{separator}{value:0width$}")?;
        }

        Ok(())
    }
}
