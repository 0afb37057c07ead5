//! # fuzzydate
//!
//! Dates and times that are only known down to some precision.
//!
//! A [`FuzzyDate`] holds a year and, optionally, a month, day, hour, minute, second, and
//! millisecond. `2023-05` is "some time in May 2023". The value knows its [`Precision`], the
//! earliest and latest instants it could be, and how to write itself as a compact string that can
//! be parsed back.
//!
//! ## Examples
//!
//! ```
//! use fuzzydate::prelude::*;
//!
//! let date = FuzzyDate::new(FuzzyDateOptions {
//!     year: 2023,
//!     month: Some(2),
//!     ..Default::default()
//! }).unwrap();
//!
//! assert_eq!(Precision::Month, date.precision());
//! assert_eq!("2023-02-01T00:00:00.000", date.earliest_padding().to_string());
//! assert_eq!("2023-02-28T23:59:59.999", date.latest_padding().to_string());
//! assert_eq!("2023-02", date.to_string());
//! ```
//!
//! Parsing goes through the same validation as construction:
//!
//! ```
//! use fuzzydate::prelude::*;
//!
//! let date: FuzzyDate = "2024-02-29T13".parse().unwrap();
//! assert_eq!(Precision::Hour, date.precision());
//!
//! assert!(matches!(
//!     "2023-02-29".parse::<FuzzyDate>(),
//!     Err(FuzzyDateError::Calendar { .. })
//! ));
//! assert!(matches!(
//!     "2023/02/28".parse::<FuzzyDate>(),
//!     Err(FuzzyDateError::Deserialization { .. })
//! ));
//! ```
//!
//! ## Important Terms
//!
//! - **Fuzzy date**: A date and time known only to its stated precision. It stands for every
//!   instant within that precision's span. Modeled by [`FuzzyDate`].
//! - **Precision**: The finest field that is set. Fields must be set as an unbroken run from the
//!   year down: a day without a month is an error.
//! - **Padding**: Filling every unset field with its smallest ([`FuzzyDate::earliest_padding`]) or
//!   largest ([`FuzzyDate::latest_padding`]) possible value, giving a [`PreciseDateOptions`].
//!
//! ## String Format
//!
//! | Precision | Example |
//! |---|---|
//! | year | `2023` |
//! | month | `2023-05` |
//! | day | `2023-05-15` |
//! | hour | `2023-05-15T10` |
//! | minute | `2023-05-15T10:30` |
//! | second | `2023-05-15T10:30:45` |
//! | millisecond | `2023-05-15T10:30:45.123` |
//!
//! Years are written with at least 4 digits. Negative (BCE) years are written with a leading `-`
//! and at least 4 digits after it, e.g. `-0044`. Years range from [`MIN_YEAR`] to [`MAX_YEAR`].
//!
//! ## Durations
//!
//! [`FuzzyDuration`] is a separate, simpler type: a set of units (years through milliseconds) that
//! each default to zero, plus the finest unit that was given. Computing a duration between two
//! fuzzy dates is left to the caller, e.g. from their paddings.
//!
//! ## Prelude
//!
//! Use it with:
//!
//! ```
//! use fuzzydate::prelude::*;
//! ```
#![warn(missing_docs)]

mod calendar;
mod codec;
mod date;
mod duration;
mod error;
mod precision;

pub use crate::calendar::{MAX_YEAR, MIN_YEAR};
pub use crate::date::{FuzzyDate, FuzzyDateOptions, PreciseDateOptions};
pub use crate::duration::{DurationPrecision, FuzzyDuration, FuzzyDurationOptions};
pub use crate::error::FuzzyDateError;
pub use crate::precision::Precision;

/// A convenience module appropriate for glob imports (`use fuzzydate::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::DurationPrecision;
    #[doc(no_inline)]
    pub use crate::FuzzyDate;
    #[doc(no_inline)]
    pub use crate::FuzzyDateError;
    #[doc(no_inline)]
    pub use crate::FuzzyDateOptions;
    #[doc(no_inline)]
    pub use crate::FuzzyDuration;
    #[doc(no_inline)]
    pub use crate::FuzzyDurationOptions;
    #[doc(no_inline)]
    pub use crate::PreciseDateOptions;
    #[doc(no_inline)]
    pub use crate::Precision;
}
