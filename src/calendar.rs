//! The calendar oracle: everything that needs to know about month lengths, leap years, or carrying
//! from one unit into the next goes through here, and here goes through [chrono].

use crate::{date::PreciseDateOptions, precision::Precision};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// The earliest year a [`FuzzyDate`](crate::FuzzyDate) may hold.
pub const MIN_YEAR: i32 = -100_000;

/// The latest year a [`FuzzyDate`](crate::FuzzyDate) may hold.
pub const MAX_YEAR: i32 = 99_999;

/// Returns the instant these fields describe, or `None` if they are not a real date and time.
pub(crate) fn to_date_time(options: &PreciseDateOptions) -> Option<NaiveDateTime> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&options.year) {
        return None;
    }
    // chrono reads milliseconds 1000..2000 as a leap second, which we don't model
    if options.millisecond > 999 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(options.year, options.month, options.day)?;
    let time = NaiveTime::from_hms_milli_opt(
        options.hour,
        options.minute,
        options.second,
        options.millisecond,
    )?;
    Some(date.and_time(time))
}

/// Truncates to the millisecond. A leap second folds into the last millisecond of the second
/// before it.
pub(crate) fn from_date_time(date_time: NaiveDateTime) -> PreciseDateOptions {
    PreciseDateOptions {
        year: date_time.year(),
        month: date_time.month(),
        day: date_time.day(),
        hour: date_time.hour(),
        minute: date_time.minute(),
        second: date_time.second(),
        millisecond: (date_time.nanosecond() / 1_000_000).min(999),
    }
}

/// Moves forward by one `unit`, carrying into coarser units as the calendar requires.
pub(crate) fn add_one(date_time: NaiveDateTime, unit: Precision) -> Option<NaiveDateTime> {
    match unit {
        Precision::Year => date_time.checked_add_months(Months::new(12)),
        Precision::Month => date_time.checked_add_months(Months::new(1)),
        Precision::Day => date_time.checked_add_signed(TimeDelta::try_days(1)?),
        Precision::Hour => date_time.checked_add_signed(TimeDelta::try_hours(1)?),
        Precision::Minute => date_time.checked_add_signed(TimeDelta::try_minutes(1)?),
        Precision::Second => date_time.checked_add_signed(TimeDelta::try_seconds(1)?),
        Precision::Millisecond => date_time.checked_add_signed(TimeDelta::try_milliseconds(1)?),
    }
}

pub(crate) fn minus_one_millisecond(date_time: NaiveDateTime) -> Option<NaiveDateTime> {
    date_time.checked_sub_signed(TimeDelta::try_milliseconds(1)?)
}
