use core::fmt::{self, Display};

/// The finest field specified in a [`FuzzyDate`](crate::FuzzyDate).
///
/// Precisions are ordered from coarse to fine, so `Precision::Year < Precision::Millisecond`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    /// Only the year is known.
    Year,
    /// Known to the month.
    Month,
    /// Known to the day of the month.
    Day,
    /// Known to the hour.
    Hour,
    /// Known to the minute.
    Minute,
    /// Known to the second.
    Second,
    /// Known to the millisecond. This is a fully specified instant.
    Millisecond,
}

impl Precision {
    /// Every precision, coarsest first. This is also the order fields must be specified in.
    pub const ALL: [Precision; 7] = [
        Precision::Year,
        Precision::Month,
        Precision::Day,
        Precision::Hour,
        Precision::Minute,
        Precision::Second,
        Precision::Millisecond,
    ];

    /// The lowercase name of the field, e.g. `"hour"`.
    pub fn name(&self) -> &'static str {
        match self {
            Precision::Year => "year",
            Precision::Month => "month",
            Precision::Day => "day",
            Precision::Hour => "hour",
            Precision::Minute => "minute",
            Precision::Second => "second",
            Precision::Millisecond => "millisecond",
        }
    }

    /// Looks a precision up by its [name](Precision::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Position in [`Precision::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
