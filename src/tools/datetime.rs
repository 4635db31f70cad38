use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::erx;

pub enum Format {
    Date,
    Time,
    DateTime,
    DatetimeWithTimeZone,
}

pub const FORMAT_DATE: &'static str = "%Y-%m-%d";
pub const FORMAT_TIME: &'static str = "%H:%M:%S";
pub const FORMAT_DATETIME: &'static str = "%Y-%m-%d %H:%M:%S";
pub const FORMAT_DATETIME_WITH_TIMEZONE: &'static str = "%Y-%m-%d %H:%M:%S %:z";

impl Format {
    pub fn layout(&self) -> &'static str {
        match self {
            Format::Date => FORMAT_DATE,
            Format::Time => FORMAT_TIME,
            Format::DateTime => FORMAT_DATETIME,
            Format::DatetimeWithTimeZone => FORMAT_DATETIME_WITH_TIMEZONE,
        }
    }
}

impl Format {
    /// datetime to string, using the wall clock of its own offset
    pub fn render<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        datetime.format(self.layout()).to_string()
    }

    /// parse datetime string
    ///
    /// layouts without an offset are read as utc, `DatetimeWithTimeZone` keeps the parsed offset.
    /// `Time` has no date part and is rejected.
    pub fn parse(&self, datetime: &str) -> erx::ResultE<DateTime<FixedOffset>> {
        let thrower = "Format::parse";
        match self {
            Format::DatetimeWithTimeZone => DateTime::parse_from_str(datetime, self.layout()).map_err(erx::amp(thrower)),
            Format::DateTime => NaiveDateTime::parse_from_str(datetime, self.layout())
                .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
                .map_err(erx::amp(thrower)),
            Format::Date => NaiveDate::parse_from_str(datetime, self.layout())
                .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)).fixed_offset())
                .map_err(erx::amp(thrower)),
            Format::Time => Err(erx::Erx::new(thrower, "time layout carries no date")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let east8 = FixedOffset::east_opt(8 * 3600).unwrap();
        let dt = east8.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(Format::DateTime.render(&dt), "2024-01-02 03:04:05");
        assert_eq!(Format::Date.render(&dt), "2024-01-02");
        assert_eq!(Format::Time.render(&dt), "03:04:05");
        assert_eq!(Format::DatetimeWithTimeZone.render(&dt), "2024-01-02 03:04:05 +08:00");
    }

    #[test]
    fn test_parse() {
        let dt = Format::DateTime.parse("1970-01-01 00:01:40").unwrap();
        assert_eq!(dt.timestamp(), 100);

        let dt = Format::DatetimeWithTimeZone.parse("2024-01-02 03:04:05 +08:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 8 * 3600);
        assert_eq!(Format::DateTime.render(&dt), "2024-01-02 03:04:05");

        assert_eq!(Format::Date.parse("1970-01-02").unwrap().timestamp(), 86400);

        let e = Format::Time.parse("03:04:05").unwrap_err();
        assert_eq!(e.thrower(), "Format::parse");
        assert!(Format::DateTime.parse("yesterday").is_err());
    }
}
