use std::fmt;

use jiff::civil::Date;

/// Errors related to moving the selected month
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Shifting `from` by `months` leaves the supported calendar range
    OutOfRange { from: Date, months: i32 },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::OutOfRange { from, months } => {
                write!(f, "cannot shift {from} by {months} month(s): out of range")
            }
        }
    }
}

impl std::error::Error for DateError {}
