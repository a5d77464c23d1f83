use chrono::{DateTime, Duration, Utc};

use crate::error::{DateRangeError, date_range_error::OrderingSnafu};

/// Inclusive mission window backing the playback timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<DateRange, DateRangeError> {
        if start > end {
            OrderingSnafu { start, end }.fail()
        } else {
            Ok(DateRange { start, end })
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn contains(&self, val: DateTime<Utc>) -> bool {
        val >= self.start && val <= self.end
    }

    /// Maps a [0, 100] timeline slider value onto the window by linear
    /// interpolation. Values outside the scale clamp to the boundaries.
    pub fn timestamp_at(&self, percent: f64) -> DateTime<Utc> {
        let fraction = (percent / 100.0).clamp(0.0, 1.0);
        let offset = self.duration().num_seconds() as f64 * fraction;
        self.start + Duration::seconds(offset as i64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_rejects_inverted_window() {
        let start = Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap();

        assert!(DateRange::new(start, start - Duration::seconds(1)).is_err());
        assert!(DateRange::new(start, start).is_ok());
    }

    #[test]
    fn test_timestamp_at_interpolates_linearly() {
        let start = Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap();
        let range = DateRange::new(start, start + Duration::days(30)).unwrap();

        assert_eq!(range.timestamp_at(0.0), range.start());
        assert_eq!(range.timestamp_at(100.0), range.end());
        assert_eq!(range.timestamp_at(50.0), start + Duration::days(15));
    }

    #[test]
    fn test_timestamp_at_clamps_out_of_scale_values() {
        let start = Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap();
        let range = DateRange::new(start, start + Duration::days(30)).unwrap();

        assert_eq!(range.timestamp_at(-20.0), range.start());
        assert_eq!(range.timestamp_at(140.0), range.end());
    }
}
