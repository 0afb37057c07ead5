use core::fmt::{self, Display};

/// The finest unit specified in a [FuzzyDuration]. Ordered from coarse to fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DurationPrecision {
    #[allow(missing_docs)]
    Years,
    #[allow(missing_docs)]
    Months,
    #[allow(missing_docs)]
    Days,
    #[allow(missing_docs)]
    Hours,
    #[allow(missing_docs)]
    Minutes,
    #[allow(missing_docs)]
    Seconds,
    #[allow(missing_docs)]
    Milliseconds,
}

impl DurationPrecision {
    /// Every unit, coarsest first.
    pub const ALL: [DurationPrecision; 7] = [
        DurationPrecision::Years,
        DurationPrecision::Months,
        DurationPrecision::Days,
        DurationPrecision::Hours,
        DurationPrecision::Minutes,
        DurationPrecision::Seconds,
        DurationPrecision::Milliseconds,
    ];

    /// The lowercase plural name of the unit, e.g. `"seconds"`.
    pub fn name(&self) -> &'static str {
        match self {
            DurationPrecision::Years => "years",
            DurationPrecision::Months => "months",
            DurationPrecision::Days => "days",
            DurationPrecision::Hours => "hours",
            DurationPrecision::Minutes => "minutes",
            DurationPrecision::Seconds => "seconds",
            DurationPrecision::Milliseconds => "milliseconds",
        }
    }
}

impl Display for DurationPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The units of a fuzzy duration, before defaulting. `None` (or NaN) means the unit was not given.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FuzzyDurationOptions {
    #[allow(missing_docs)]
    pub years: Option<f64>,
    #[allow(missing_docs)]
    pub months: Option<f64>,
    #[allow(missing_docs)]
    pub days: Option<f64>,
    #[allow(missing_docs)]
    pub hours: Option<f64>,
    #[allow(missing_docs)]
    pub minutes: Option<f64>,
    #[allow(missing_docs)]
    pub seconds: Option<f64>,
    #[allow(missing_docs)]
    pub milliseconds: Option<f64>,
}

impl FuzzyDurationOptions {
    fn units(&self) -> [Option<f64>; 7] {
        [
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds,
        ]
    }
}

fn given(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// A length of time known down to some [DurationPrecision].
///
/// Every unit is always present: ones not given are `0`. The precision remembers which units were
/// actually given, so `seconds: Some(0.0)` makes a duration precise to the second even though its
/// value is the same as leaving seconds out.
///
/// No arithmetic or normalization is done: `90` minutes stays `90` minutes, and negative or
/// fractional units are kept as given.
///
/// ```
/// use fuzzydate::prelude::*;
///
/// let duration = FuzzyDuration::new(FuzzyDurationOptions {
///     years: Some(1.0),
///     seconds: Some(20.0),
///     ..Default::default()
/// });
/// assert_eq!(DurationPrecision::Seconds, duration.precision());
/// assert_eq!(0.0, duration.minutes());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyDuration {
    years: f64,
    months: f64,
    days: f64,
    hours: f64,
    minutes: f64,
    seconds: f64,
    milliseconds: f64,
    precision: DurationPrecision,
}

impl FuzzyDuration {
    /// Returns a new [FuzzyDuration]. This never fails.
    pub fn new(options: FuzzyDurationOptions) -> Self {
        let units = options.units();
        let precision = DurationPrecision::ALL
            .into_iter()
            .zip(units)
            .rev()
            .find(|(_, value)| given(*value).is_some())
            .map_or(DurationPrecision::Years, |(precision, _)| precision);
        let value = |unit: Option<f64>| given(unit).unwrap_or(0.0);

        Self {
            years: value(options.years),
            months: value(options.months),
            days: value(options.days),
            hours: value(options.hours),
            minutes: value(options.minutes),
            seconds: value(options.seconds),
            milliseconds: value(options.milliseconds),
            precision,
        }
    }

    /// The finest unit that was given, or [DurationPrecision::Years] if none were.
    pub fn precision(&self) -> DurationPrecision {
        self.precision
    }

    #[allow(missing_docs)]
    pub fn years(&self) -> f64 {
        self.years
    }

    #[allow(missing_docs)]
    pub fn months(&self) -> f64 {
        self.months
    }

    #[allow(missing_docs)]
    pub fn days(&self) -> f64 {
        self.days
    }

    #[allow(missing_docs)]
    pub fn hours(&self) -> f64 {
        self.hours
    }

    #[allow(missing_docs)]
    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    #[allow(missing_docs)]
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    #[allow(missing_docs)]
    pub fn milliseconds(&self) -> f64 {
        self.milliseconds
    }
}

impl Default for FuzzyDuration {
    fn default() -> Self {
        Self::new(FuzzyDurationOptions::default())
    }
}
