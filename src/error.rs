use crate::date::PreciseDateOptions;

/// Errors from constructing or parsing a [`FuzzyDate`](crate::FuzzyDate).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FuzzyDateError {
    /// The defined fields do not form an unbroken run starting at the year. For example, a day was
    /// given without a month.
    #[error("`{field}` is set but `{missing}` is not")]
    Hierarchy {
        /// The first field that was set after the gap.
        field: &'static str,
        /// The unset field that comes before it.
        missing: &'static str,
    },

    /// The fields, with every unset field padded to its minimum, are not a real date and time on
    /// the proleptic Gregorian calendar. For example, February 30th or hour 24.
    #[error("`{padded}` is not a valid date and time")]
    Calendar {
        /// The minimally padded date and time that was rejected.
        padded: PreciseDateOptions,
    },

    /// A string could not be read as a fuzzy date.
    #[error("{reason}")]
    Deserialization {
        /// Why the string was rejected.
        reason: String,
    },
}

impl FuzzyDateError {
    pub(crate) fn invalid_format() -> Self {
        FuzzyDateError::Deserialization {
            reason: "Invalid format".to_owned(),
        }
    }
}
