use jiff::{ToSpan, Zoned};
use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::error::DateError;

/// Display pattern for the month header, e.g. "2021 March".
const MONTH_LABEL_FORMAT: &str = "%Y %B";

/// The month currently shown on the dashboard.
///
/// Stored as a full civil date so that moving back and forth keeps the
/// day of month where the calendar allows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedMonth(Date);

impl SelectedMonth {
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    /// Today's date in the given time zone.
    pub fn today(tz: &TimeZone) -> Self {
        Self(Zoned::now().with_time_zone(tz.clone()).date())
    }

    pub fn date(&self) -> Date {
        self.0
    }

    /// Move by whole calendar months. Negative values go back in time.
    ///
    /// The day is clamped to the end of the target month (Jan 31 + 1 month
    /// is Feb 28/29).
    pub fn shift(&self, months: i32) -> Result<Self, DateError> {
        self.0
            .checked_add(i64::from(months).months())
            .map(Self)
            .map_err(|_| DateError::OutOfRange {
                from: self.0,
                months,
            })
    }

    /// Header label, e.g. "2021 March".
    pub fn label(&self) -> String {
        self.0.strftime(MONTH_LABEL_FORMAT).to_string()
    }

    /// ISO 8601 date sent as the `date` query parameter.
    pub fn query_date(&self) -> String {
        self.0.to_string()
    }

    pub fn same_month(&self, other: &SelectedMonth) -> bool {
        self.0.year() == other.0.year() && self.0.month() == other.0.month()
    }
}

impl From<Date> for SelectedMonth {
    fn from(date: Date) -> Self {
        Self(date)
    }
}
