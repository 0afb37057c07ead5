use crate::{calendar, codec, error::FuzzyDateError, precision::Precision};
use chrono::NaiveDateTime;
use core::fmt::{self, Display};
use tracing::{debug, trace};

/// The fields of a fuzzy date, before validation. `None` means the field is not known.
///
/// `Some(0)` and `None` are different: `hour: Some(0)` is midnight, while `hour: None` is any hour
/// of the day.
///
/// ```
/// use fuzzydate::prelude::*;
///
/// let options = FuzzyDateOptions {
///     year: 2023,
///     month: Some(5),
///     ..Default::default()
/// };
/// assert!(FuzzyDate::new(options).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FuzzyDateOptions {
    /// The year. Negative years are BCE, counted astronomically (`0` is 1 BCE).
    pub year: i32,
    /// Month of the year, `1`–`12`.
    pub month: Option<u32>,
    /// Day of the month, `1`–`31`.
    pub day: Option<u32>,
    /// Hour of the day, `0`–`23`.
    pub hour: Option<u32>,
    /// Minute of the hour, `0`–`59`.
    pub minute: Option<u32>,
    /// Second of the minute, `0`–`59`.
    pub second: Option<u32>,
    /// Millisecond of the second, `0`–`999`.
    pub millisecond: Option<u32>,
}

impl FuzzyDateOptions {
    /// Options with only the year known.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    /// The fields after the year, in [`Precision`] order.
    fn sub_year_fields(&self) -> [Option<u32>; 6] {
        [
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
        ]
    }

    /// Which fields are set, indexed like [`Precision::ALL`].
    fn presence(&self) -> [bool; 7] {
        let mut presence = [true; 7];
        for (slot, field) in presence[1..].iter_mut().zip(self.sub_year_fields()) {
            *slot = field.is_some();
        }
        presence
    }

    /// Fills every unset field with the smallest value it can take.
    fn pad_min(&self) -> PreciseDateOptions {
        PreciseDateOptions {
            year: self.year,
            month: self.month.unwrap_or(1),
            day: self.day.unwrap_or(1),
            hour: self.hour.unwrap_or(0),
            minute: self.minute.unwrap_or(0),
            second: self.second.unwrap_or(0),
            millisecond: self.millisecond.unwrap_or(0),
        }
    }

    /// Keeps the fields up to and including `precision`, and unsets the rest.
    fn truncate(mut self, precision: Precision) -> Self {
        let fields = [
            &mut self.month,
            &mut self.day,
            &mut self.hour,
            &mut self.minute,
            &mut self.second,
            &mut self.millisecond,
        ];
        for field in fields.into_iter().skip(precision.index()) {
            *field = None;
        }
        self
    }
}

/// A single, fully specified instant. This is what [`FuzzyDate::earliest_padding`] and
/// [`FuzzyDate::latest_padding`] produce.
///
/// Displays as `YYYY-MM-DDTHH:MM:SS.mmm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreciseDateOptions {
    #[allow(missing_docs)]
    pub year: i32,
    #[allow(missing_docs)]
    pub month: u32,
    #[allow(missing_docs)]
    pub day: u32,
    #[allow(missing_docs)]
    pub hour: u32,
    #[allow(missing_docs)]
    pub minute: u32,
    #[allow(missing_docs)]
    pub second: u32,
    #[allow(missing_docs)]
    pub millisecond: u32,
}

impl PreciseDateOptions {
    /// Returns the chrono equivalent, or `None` if these fields are not a real date and time.
    pub fn to_date_time(&self) -> Option<NaiveDateTime> {
        calendar::to_date_time(self)
    }
}

impl From<NaiveDateTime> for PreciseDateOptions {
    /// Sub-millisecond precision is dropped.
    fn from(date_time: NaiveDateTime) -> Self {
        calendar::from_date_time(date_time)
    }
}

impl Display for PreciseDateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_year(f, self.year)?;
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Checks that the set fields are an unbroken run starting from the year.
fn check_hierarchy(options: &FuzzyDateOptions) -> Result<(), FuzzyDateError> {
    let presence = options.presence();
    let Some(first_missing) = presence.iter().position(|present| !present) else {
        return Ok(());
    };
    match presence[first_missing..].iter().position(|present| *present) {
        Some(offset) => Err(FuzzyDateError::Hierarchy {
            field: Precision::ALL[first_missing + offset].name(),
            missing: Precision::ALL[first_missing].name(),
        }),
        None => Ok(()),
    }
}

/// Checks that the set fields, padded to their minimums, are a real date and time.
fn check_calendar(options: &FuzzyDateOptions) -> Result<(), FuzzyDateError> {
    let padded = options.pad_min();
    match calendar::to_date_time(&padded) {
        Some(_) => Ok(()),
        None => Err(FuzzyDateError::Calendar { padded }),
    }
}

/// A date and time known only down to some [`Precision`].
///
/// A `FuzzyDate` stands for every instant within its precision. `2023-05` is any moment in May
/// 2023; [`earliest_padding`](FuzzyDate::earliest_padding) and
/// [`latest_padding`](FuzzyDate::latest_padding) give the first and last millisecond of that span.
///
/// Values can only be made through [`FuzzyDate::new`] or by parsing, both of which validate, so
/// every `FuzzyDate` is a real span on the calendar.
///
/// # Examples
///
/// ```
/// use fuzzydate::prelude::*;
///
/// let date: FuzzyDate = "2024-02".parse().unwrap();
/// assert_eq!(Precision::Month, date.precision());
/// assert_eq!(29, date.latest_padding().day);
/// assert_eq!("2024-02", date.to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FuzzyDate {
    options: FuzzyDateOptions,
}

impl FuzzyDate {
    /// Validates `options` and returns a new [`FuzzyDate`].
    ///
    /// # Errors
    ///
    /// - [`FuzzyDateError::Hierarchy`] if a field is set while a coarser one is not, e.g. a day
    ///   without a month.
    /// - [`FuzzyDateError::Calendar`] if the fields can't be a real date and time, e.g. February
    ///   30th, or a year outside [`MIN_YEAR`](crate::MIN_YEAR)..=[`MAX_YEAR`](crate::MAX_YEAR).
    pub fn new(options: FuzzyDateOptions) -> Result<Self, FuzzyDateError> {
        trace!(?options, "validating fuzzy date");
        check_hierarchy(&options)
            .and_then(|_| check_calendar(&options))
            .inspect_err(|err| debug!(?options, %err, "rejected fuzzy date"))?;
        Ok(Self { options })
    }

    /// Returns a [`FuzzyDate`] holding the fields of `date_time` down to `precision`.
    ///
    /// # Errors
    ///
    /// - [`FuzzyDateError::Calendar`] if the year is outside
    ///   [`MIN_YEAR`](crate::MIN_YEAR)..=[`MAX_YEAR`](crate::MAX_YEAR).
    pub fn from_date_time(
        date_time: NaiveDateTime,
        precision: Precision,
    ) -> Result<Self, FuzzyDateError> {
        let precise = PreciseDateOptions::from(date_time);
        let options = FuzzyDateOptions {
            year: precise.year,
            month: Some(precise.month),
            day: Some(precise.day),
            hour: Some(precise.hour),
            minute: Some(precise.minute),
            second: Some(precise.second),
            millisecond: Some(precise.millisecond),
        };
        Self::new(options.truncate(precision))
    }

    /// The fields this date was made from.
    pub fn options(&self) -> &FuzzyDateOptions {
        &self.options
    }

    #[allow(missing_docs)]
    pub fn year(&self) -> i32 {
        self.options.year
    }

    #[allow(missing_docs)]
    pub fn month(&self) -> Option<u32> {
        self.options.month
    }

    #[allow(missing_docs)]
    pub fn day(&self) -> Option<u32> {
        self.options.day
    }

    #[allow(missing_docs)]
    pub fn hour(&self) -> Option<u32> {
        self.options.hour
    }

    #[allow(missing_docs)]
    pub fn minute(&self) -> Option<u32> {
        self.options.minute
    }

    #[allow(missing_docs)]
    pub fn second(&self) -> Option<u32> {
        self.options.second
    }

    #[allow(missing_docs)]
    pub fn millisecond(&self) -> Option<u32> {
        self.options.millisecond
    }

    /// The finest field that is set.
    pub fn precision(&self) -> Precision {
        let presence = self.options.presence();
        Precision::ALL
            .into_iter()
            .rev()
            .find(|precision| presence[precision.index()])
            .unwrap_or(Precision::Year)
    }

    /// The first instant this date could be: every unset field at its minimum.
    pub fn earliest_padding(&self) -> PreciseDateOptions {
        self.options.pad_min()
    }

    /// The last instant this date could be: one millisecond before the next span of the same
    /// precision begins.
    pub fn latest_padding(&self) -> PreciseDateOptions {
        let precision = self.precision();
        let earliest = self.earliest_padding();
        if precision == Precision::Millisecond {
            return earliest;
        }
        let start = calendar::to_date_time(&earliest)
            .expect("FuzzyDate always holds a calendar-valid date");
        let end = calendar::add_one(start, precision)
            .and_then(calendar::minus_one_millisecond)
            .expect("years up to MAX_YEAR can be carried into the next year");
        calendar::from_date_time(end)
    }

    /// [`earliest_padding`](FuzzyDate::earliest_padding) as a chrono value.
    pub fn earliest(&self) -> NaiveDateTime {
        calendar::to_date_time(&self.earliest_padding())
            .expect("FuzzyDate always holds a calendar-valid date")
    }

    /// [`latest_padding`](FuzzyDate::latest_padding) as a chrono value.
    pub fn latest(&self) -> NaiveDateTime {
        calendar::to_date_time(&self.latest_padding())
            .expect("latest padding is derived by the calendar and is always valid")
    }

    /// Whether `date_time` falls within this date's span, inclusive at both ends. `date_time` is
    /// truncated to the millisecond first, and a leap second counts as the second before it.
    pub fn contains(&self, date_time: &NaiveDateTime) -> bool {
        let instant = PreciseDateOptions::from(*date_time);
        self.earliest_padding() <= instant && instant <= self.latest_padding()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::*;

    fn opts(fields: &[u32]) -> FuzzyDateOptions {
        let mut options = FuzzyDateOptions::new(fields[0] as i32);
        let slots = [
            &mut options.month,
            &mut options.day,
            &mut options.hour,
            &mut options.minute,
            &mut options.second,
            &mut options.millisecond,
        ];
        for (slot, value) in slots.into_iter().zip(&fields[1..]) {
            *slot = Some(*value);
        }
        options
    }

    fn precise(fields: [i64; 7]) -> PreciseDateOptions {
        PreciseDateOptions {
            year: fields[0] as i32,
            month: fields[1] as u32,
            day: fields[2] as u32,
            hour: fields[3] as u32,
            minute: fields[4] as u32,
            second: fields[5] as u32,
            millisecond: fields[6] as u32,
        }
    }

    #[rstest]
    #[case(&[2023])]
    #[case(&[2023, 5])]
    #[case(&[2023, 5, 15])]
    #[case(&[2023, 5, 15, 0])]
    #[case(&[2023, 5, 15, 10, 30])]
    #[case(&[2023, 5, 15, 10, 30, 0])]
    #[case(&[2023, 5, 15, 10, 30, 45, 999])]
    #[case(&[2024, 2, 29])]
    fn test_new_keeps_fields(#[case] fields: &[u32]) {
        let options = opts(fields);
        let date = FuzzyDate::new(options).unwrap();
        assert_eq!(&options, date.options());
    }

    #[test]
    fn test_new_negative_year() {
        let date = FuzzyDate::new(FuzzyDateOptions::new(-500)).unwrap();
        assert_eq!(-500, date.year());
        assert_eq!(None, date.month());
    }

    #[rstest]
    #[case(FuzzyDateOptions { year: 2023, day: Some(15), ..Default::default() }, "day", "month")]
    #[case(FuzzyDateOptions { year: 2023, month: Some(5), minute: Some(30), ..Default::default() }, "minute", "day")]
    #[case(FuzzyDateOptions { year: 2023, month: Some(5), day: Some(1), hour: Some(3), second: Some(0), ..Default::default() }, "second", "minute")]
    #[case(FuzzyDateOptions { year: 2023, millisecond: Some(1), ..Default::default() }, "millisecond", "month")]
    fn test_hierarchy_error(
        #[case] options: FuzzyDateOptions,
        #[case] field: &'static str,
        #[case] missing: &'static str,
    ) {
        assert_eq!(
            Err(FuzzyDateError::Hierarchy { field, missing }),
            FuzzyDate::new(options)
        );
    }

    /// every presence pattern that has a gap is rejected, every one that doesn't is accepted
    #[test]
    fn test_hierarchy_all_patterns() {
        for pattern in std::iter::repeat([false, true])
            .take(6)
            .multi_cartesian_product()
        {
            let mut options = FuzzyDateOptions::new(2023);
            let slots = [
                &mut options.month,
                &mut options.day,
                &mut options.hour,
                &mut options.minute,
                &mut options.second,
                &mut options.millisecond,
            ];
            for (slot, present) in slots.into_iter().zip(&pattern) {
                *slot = present.then_some(1);
            }
            let is_prefix = pattern.iter().skip_while(|p| **p).all(|p| !p);
            assert_eq!(is_prefix, check_hierarchy(&options).is_ok(), "{pattern:?}");
        }
    }

    #[rstest]
    #[case(&[2023, 13])]
    #[case(&[2023, 0])]
    #[case(&[2023, 2, 30])]
    #[case(&[2023, 4, 31])]
    #[case(&[2023, 2, 29])]
    #[case(&[2023, 5, 15, 25])]
    #[case(&[2023, 5, 15, 10, 60])]
    #[case(&[2023, 5, 15, 10, 30, 60])]
    #[case(&[2023, 5, 15, 10, 30, 0, 1000])]
    #[case(&[100_000])]
    fn test_calendar_error(#[case] fields: &[u32]) {
        let options = opts(fields);
        assert_eq!(
            Err(FuzzyDateError::Calendar {
                padded: options.pad_min()
            }),
            FuzzyDate::new(options)
        );
    }

    #[test]
    fn test_hierarchy_checked_before_calendar() {
        let options = FuzzyDateOptions {
            year: 2023,
            day: Some(40),
            ..Default::default()
        };
        assert!(matches!(
            FuzzyDate::new(options),
            Err(FuzzyDateError::Hierarchy { .. })
        ));
    }

    #[rstest]
    #[case(&[2023], Precision::Year)]
    #[case(&[2023, 5], Precision::Month)]
    #[case(&[2023, 5, 15], Precision::Day)]
    #[case(&[2023, 5, 15, 0], Precision::Hour)]
    #[case(&[2023, 5, 15, 0, 0], Precision::Minute)]
    #[case(&[2023, 5, 15, 0, 0, 0], Precision::Second)]
    #[case(&[2023, 5, 15, 0, 0, 0, 0], Precision::Millisecond)]
    fn test_precision(#[case] fields: &[u32], #[case] expected: Precision) {
        let date = FuzzyDate::new(opts(fields)).unwrap();
        assert_eq!(expected, date.precision());
    }

    #[rstest]
    #[case(&[2023], [2023, 1, 1, 0, 0, 0, 0])]
    #[case(&[2023, 5], [2023, 5, 1, 0, 0, 0, 0])]
    #[case(&[2023, 5, 15, 10], [2023, 5, 15, 10, 0, 0, 0])]
    #[case(&[2023, 5, 15, 10, 30, 45, 123], [2023, 5, 15, 10, 30, 45, 123])]
    fn test_earliest_padding(#[case] fields: &[u32], #[case] expected: [i64; 7]) {
        let date = FuzzyDate::new(opts(fields)).unwrap();
        assert_eq!(precise(expected), date.earliest_padding());
    }

    #[rstest]
    #[case(&[2023], [2023, 12, 31, 23, 59, 59, 999])]
    #[case(&[2023, 2], [2023, 2, 28, 23, 59, 59, 999])]
    #[case(&[2024, 2], [2024, 2, 29, 23, 59, 59, 999])]
    #[case(&[1900, 2], [1900, 2, 28, 23, 59, 59, 999])]
    #[case(&[2023, 4], [2023, 4, 30, 23, 59, 59, 999])]
    #[case(&[2023, 12], [2023, 12, 31, 23, 59, 59, 999])]
    #[case(&[2023, 12, 31], [2023, 12, 31, 23, 59, 59, 999])]
    #[case(&[2023, 5, 15, 10], [2023, 5, 15, 10, 59, 59, 999])]
    #[case(&[2023, 5, 15, 10, 30], [2023, 5, 15, 10, 30, 59, 999])]
    #[case(&[2023, 5, 15, 10, 30, 45], [2023, 5, 15, 10, 30, 45, 999])]
    #[case(&[2023, 5, 15, 10, 30, 45, 123], [2023, 5, 15, 10, 30, 45, 123])]
    #[case(&[99_999], [99_999, 12, 31, 23, 59, 59, 999])]
    fn test_latest_padding(#[case] fields: &[u32], #[case] expected: [i64; 7]) {
        let date = FuzzyDate::new(opts(fields)).unwrap();
        assert_eq!(precise(expected), date.latest_padding());
    }

    #[test]
    fn test_latest_padding_negative_year() {
        let date = FuzzyDate::new(FuzzyDateOptions {
            year: -4,
            month: Some(2),
            ..Default::default()
        })
        .unwrap();
        // -4 is a leap year in the proleptic Gregorian calendar
        assert_eq!(precise([-4, 2, 29, 23, 59, 59, 999]), date.latest_padding());
    }

    #[test]
    fn test_earliest_not_after_latest() {
        for fields in [&[2023][..], &[2023, 7][..], &[2023, 7, 4][..], &[2023, 7, 4, 12, 0][..]] {
            let date = FuzzyDate::new(opts(fields)).unwrap();
            assert!(date.earliest() <= date.latest());
            assert!(date.earliest_padding() <= date.latest_padding());
        }
    }

    #[test]
    fn test_contains() {
        let date = FuzzyDate::new(opts(&[2023, 5])).unwrap();
        let inside = precise([2023, 5, 31, 23, 59, 59, 999]).to_date_time().unwrap();
        let before = precise([2023, 4, 30, 23, 59, 59, 999]).to_date_time().unwrap();
        let after = precise([2023, 6, 1, 0, 0, 0, 0]).to_date_time().unwrap();
        assert!(date.contains(&inside));
        assert!(date.contains(&date.earliest()));
        assert!(!date.contains(&before));
        assert!(!date.contains(&after));
    }

    #[rstest]
    #[case(Precision::Year, &[2023])]
    #[case(Precision::Day, &[2023, 5, 15])]
    #[case(Precision::Second, &[2023, 5, 15, 10, 30, 45])]
    #[case(Precision::Millisecond, &[2023, 5, 15, 10, 30, 45, 123])]
    fn test_from_date_time(#[case] precision: Precision, #[case] expected: &[u32]) {
        let date_time = precise([2023, 5, 15, 10, 30, 45, 123]).to_date_time().unwrap();
        let date = FuzzyDate::from_date_time(date_time, precision).unwrap();
        assert_eq!(&opts(expected), date.options());
        assert!(date.contains(&date_time));
    }

    #[rstest]
    #[case(Precision::Minute, &[2016, 12, 31, 23, 59])]
    #[case(Precision::Second, &[2016, 12, 31, 23, 59, 59])]
    #[case(Precision::Millisecond, &[2016, 12, 31, 23, 59, 59, 999])]
    fn test_from_date_time_leap_second(#[case] precision: Precision, #[case] expected: &[u32]) {
        let leap = chrono::NaiveDate::from_ymd_opt(2016, 12, 31)
            .and_then(|date| date.and_hms_milli_opt(23, 59, 59, 1_500))
            .unwrap();
        let date = FuzzyDate::from_date_time(leap, precision).unwrap();
        assert_eq!(&opts(expected), date.options());
        assert!(date.contains(&leap));
    }

    #[test]
    fn test_precise_display() {
        assert_eq!(
            "2023-01-02T03:04:05.006",
            precise([2023, 1, 2, 3, 4, 5, 6]).to_string()
        );
    }
}
