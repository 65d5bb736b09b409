//! DateTime display utilities.
//!
//! Wrapper types that format timestamps in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Full local date and time, `YYYY-MM-DD HH:MM:SS TZ`. Used for store
/// metadata such as creation and update times.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Calendar date in long form, e.g. `March 04, 2025`.
pub struct LongDate<'a>(pub &'a Timestamp);

impl fmt::Display for LongDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%B %d, %Y")
        )
    }
}

/// Month and year, e.g. `March 2025`.
pub struct MonthYear<'a>(pub &'a Timestamp);

impl fmt::Display for MonthYear<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%B %Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mid-month so every timezone offset lands in the same month
    fn mid_june() -> Timestamp {
        "2024-06-15T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_long_date_and_month_year() {
        let ts = mid_june();
        let long = LongDate(&ts).to_string();
        assert!(long.starts_with("June 1"));
        assert!(long.ends_with(", 2024"));
        assert_eq!(MonthYear(&ts).to_string(), "June 2024");
    }

    #[test]
    fn test_local_datetime_shape() {
        let ts = mid_june();
        let output = LocalDateTime(&ts).to_string();
        assert!(output.starts_with("2024-06-1"));
        assert!(output.matches(':').count() >= 2);
    }
}
