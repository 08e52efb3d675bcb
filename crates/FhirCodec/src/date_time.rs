use std::fmt;
use std::sync::Arc;

use chrono::{DateTime as ChronoDateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

/// Precision levels for FHIR `date` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Full date (YYYY-MM-DD)
    Full,
}

/// Precision levels for FHIR `time` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimePrecision {
    /// HH:MM:SS
    Second,
    /// HH:MM:SS with a fractional part of one to nine digits
    Fraction,
}

/// Precision levels for FHIR `dateTime` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTimePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Date only (YYYY-MM-DD)
    Date,
    /// Date and time to the second, with zone
    Second,
    /// Date and time with fractional seconds, with zone
    Fraction,
}

/// Reads exactly `width` ASCII digits from the start of `s`.
fn take_digits(s: &str, width: usize) -> Option<(u32, &str)> {
    if s.len() < width || !s.as_bytes()[..width].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let value = s[..width].parse::<u32>().ok()?;
    Some((value, &s[width..]))
}

/// Precision-aware FHIR `date`.
///
/// Accepts `YYYY`, `YYYY-MM` and `YYYY-MM-DD`. The year is exactly four
/// digits and not `0000`; month and day must exist in the calendar, so
/// `2017-02-29` is rejected while `2016-02-29` is accepted.
///
/// ```rust
/// use fhir_codec::{DatePrecision, PrecisionDate};
///
/// let date = PrecisionDate::parse("2015-11").expect("valid date");
/// assert_eq!(date.precision(), DatePrecision::YearMonth);
/// assert_eq!(date.month(), Some(11));
/// assert!(PrecisionDate::parse("2017-13").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    precision: DatePrecision,
    original_string: Arc<str>,
}

impl PrecisionDate {
    /// Parses a FHIR date string, preserving precision.
    pub fn parse(s: &str) -> Option<Self> {
        let (date, rest) = Self::parse_prefix(s)?;
        if !rest.is_empty() {
            return None;
        }
        Some(date)
    }

    /// Parses a date at the start of `s` and returns the unread remainder.
    fn parse_prefix(s: &str) -> Option<(Self, &str)> {
        let (year, rest) = take_digits(s, 4)?;
        if year == 0 {
            return None;
        }
        let year = year as i32;
        let Some(rest) = rest.strip_prefix('-') else {
            return Some((Self::with_parts(year, None, None, DatePrecision::Year, s, rest), rest));
        };
        let (month, rest) = take_digits(rest, 2)?;
        if !(1..=12).contains(&month) {
            return None;
        }
        let Some(rest) = rest.strip_prefix('-') else {
            return Some((
                Self::with_parts(year, Some(month), None, DatePrecision::YearMonth, s, rest),
                rest,
            ));
        };
        let (day, rest) = take_digits(rest, 2)?;
        NaiveDate::from_ymd_opt(year, month, day)?;
        Some((
            Self::with_parts(year, Some(month), Some(day), DatePrecision::Full, s, rest),
            rest,
        ))
    }

    fn with_parts(
        year: i32,
        month: Option<u32>,
        day: Option<u32>,
        precision: DatePrecision,
        source: &str,
        rest: &str,
    ) -> Self {
        Self {
            year,
            month,
            day,
            precision,
            original_string: Arc::from(&source[..source.len() - rest.len()]),
        }
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Converts to a `NaiveDate`, filling missing components with 1.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }
}

/// FHIR `time`: `HH:MM:SS` with optional fraction, no zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionTime {
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: Option<u32>,
    precision: TimePrecision,
    original_string: Arc<str>,
}

impl PrecisionTime {
    /// Parses a FHIR time string.
    pub fn parse(s: &str) -> Option<Self> {
        let (time, rest) = Self::parse_prefix(s)?;
        if !rest.is_empty() {
            return None;
        }
        Some(time)
    }

    fn parse_prefix(s: &str) -> Option<(Self, &str)> {
        let (hour, rest) = take_digits(s, 2)?;
        let rest = rest.strip_prefix(':')?;
        let (minute, rest) = take_digits(rest, 2)?;
        let rest = rest.strip_prefix(':')?;
        let (second, rest) = take_digits(rest, 2)?;
        // 24:00:00 is not a valid FHIR time; leap seconds (60) are
        if hour > 23 || minute > 59 || second > 60 {
            return None;
        }
        let (nanosecond, precision, rest) = match rest.strip_prefix('.') {
            Some(fraction) => {
                let digits = fraction.bytes().take_while(u8::is_ascii_digit).count();
                if digits == 0 || digits > 9 {
                    return None;
                }
                let padded = format!("{:0<9}", &fraction[..digits]);
                let nanos = padded.parse::<u32>().ok()?;
                (Some(nanos), TimePrecision::Fraction, &fraction[digits..])
            }
            None => (None, TimePrecision::Second, rest),
        };
        Some((
            Self {
                hour,
                minute,
                second,
                nanosecond,
                precision,
                original_string: Arc::from(&s[..s.len() - rest.len()]),
            },
            rest,
        ))
    }

    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn nanosecond(&self) -> Option<u32> {
        self.nanosecond
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        // chrono models a leap second as 59 with nanoseconds >= 1e9
        let (second, extra) = if self.second == 60 { (59, 1_000_000_000) } else { (self.second, 0) };
        NaiveTime::from_hms_nano_opt(
            self.hour,
            self.minute,
            second,
            self.nanosecond.unwrap_or(0) + extra,
        )
    }
}

/// Precision-aware FHIR `dateTime`.
///
/// A value is a partial date (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) or a full
/// date with a time to at least the second and a mandatory zone
/// (`Z` or `+hh:mm`/`-hh:mm`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDateTime {
    date: PrecisionDate,
    time: Option<PrecisionTime>,
    /// Offset from UTC in minutes
    timezone_offset: Option<i32>,
    precision: DateTimePrecision,
    original_string: Arc<str>,
}

impl PrecisionDateTime {
    /// Parses a FHIR dateTime string, preserving precision and zone.
    pub fn parse(s: &str) -> Option<Self> {
        let (date, rest) = PrecisionDate::parse_prefix(s)?;
        if rest.is_empty() {
            let precision = match date.precision {
                DatePrecision::Year => DateTimePrecision::Year,
                DatePrecision::YearMonth => DateTimePrecision::YearMonth,
                DatePrecision::Full => DateTimePrecision::Date,
            };
            return Some(Self {
                date,
                time: None,
                timezone_offset: None,
                precision,
                original_string: Arc::from(s),
            });
        }

        if date.precision != DatePrecision::Full {
            return None;
        }
        let rest = rest.strip_prefix('T')?;
        let (time, rest) = PrecisionTime::parse_prefix(rest)?;
        let timezone_offset = Self::parse_timezone_offset(rest)?;
        let precision = match time.precision {
            TimePrecision::Second => DateTimePrecision::Second,
            TimePrecision::Fraction => DateTimePrecision::Fraction,
        };
        Some(Self {
            date,
            time: Some(time),
            timezone_offset: Some(timezone_offset),
            precision,
            original_string: Arc::from(s),
        })
    }

    /// Parses `Z` or `+hh:mm` / `-hh:mm` into minutes east of UTC.
    fn parse_timezone_offset(s: &str) -> Option<i32> {
        if s == "Z" {
            return Some(0);
        }
        let (sign, rest) = match s.as_bytes().first()? {
            b'+' => (1, &s[1..]),
            b'-' => (-1, &s[1..]),
            _ => return None,
        };
        let (hours, rest) = take_digits(rest, 2)?;
        let rest = rest.strip_prefix(':')?;
        let (minutes, rest) = take_digits(rest, 2)?;
        if !rest.is_empty() || hours > 14 || minutes > 59 {
            return None;
        }
        Some(sign * (hours as i32 * 60 + minutes as i32))
    }

    pub fn precision(&self) -> DateTimePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn date(&self) -> &PrecisionDate {
        &self.date
    }

    pub fn time(&self) -> Option<&PrecisionTime> {
        self.time.as_ref()
    }

    pub fn timezone_offset(&self) -> Option<i32> {
        self.timezone_offset
    }

    /// The instant in UTC. Only values with a time component have one.
    pub fn to_utc(&self) -> Option<ChronoDateTime<Utc>> {
        let time = self.time.as_ref()?.to_naive_time()?;
        let offset = FixedOffset::east_opt(self.timezone_offset? * 60)?;
        let local = self.date.to_naive_date()?.and_time(time);
        offset
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// A FHIR `instant`: a dateTime that always has seconds and a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionInstant {
    inner: PrecisionDateTime,
}

impl PrecisionInstant {
    pub fn parse(s: &str) -> Option<Self> {
        let inner = PrecisionDateTime::parse(s)?;
        if inner.precision < DateTimePrecision::Second {
            return None;
        }
        Some(Self { inner })
    }

    pub fn original_string(&self) -> &str {
        self.inner.original_string()
    }

    pub fn as_datetime(&self) -> &PrecisionDateTime {
        &self.inner
    }

    pub fn to_utc(&self) -> Option<ChronoDateTime<Utc>> {
        self.inner.to_utc()
    }
}

impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.original_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_dates() {
        for (text, precision) in [
            ("1000", DatePrecision::Year),
            ("9999", DatePrecision::Year),
            ("2015-12", DatePrecision::YearMonth),
            ("2015-01-31", DatePrecision::Full),
            ("2016-02-29", DatePrecision::Full),
        ] {
            let date = PrecisionDate::parse(text).unwrap_or_else(|| panic!("{text} is valid"));
            assert_eq!(date.precision(), precision);
            assert_eq!(date.original_string(), text);
        }
    }

    #[test]
    fn rejects_invalid_dates() {
        for text in [
            "", " ", "abc", "999", "-999", "10000", "-1", "0000", "2017-13", "2017-00",
            "2017-11-00", "2017-11-32", "2017-02-29", "2017-1-01", "2017-11-00T01:12:31Z",
        ] {
            assert!(PrecisionDate::parse(text).is_none(), "{text:?} must be rejected");
        }
    }

    #[test]
    fn parses_date_times_with_zones() {
        let dt = PrecisionDateTime::parse("2015-01-31T21:32:52.12679+01:00").expect("valid");
        assert_eq!(dt.precision(), DateTimePrecision::Fraction);
        assert_eq!(dt.timezone_offset(), Some(60));
        assert_eq!(dt.time().and_then(PrecisionTime::nanosecond), Some(126_790_000));

        let utc = PrecisionDateTime::parse("2015-11-09T12:00:00+01:00")
            .and_then(|dt| dt.to_utc())
            .expect("has an instant");
        assert_eq!(utc.to_rfc3339(), "2015-11-09T11:00:00+00:00");

        let nanos = PrecisionDateTime::parse("2015-01-31T21:32:52.000000001Z").expect("valid");
        assert_eq!(nanos.time().and_then(PrecisionTime::nanosecond), Some(1));
    }

    #[test]
    fn date_times_need_a_zone_once_time_is_present() {
        assert!(PrecisionDateTime::parse("2015-01-31T21:32:52").is_none());
        assert!(PrecisionDateTime::parse("2015-01-31T21:32Z").is_none());
        assert!(PrecisionDateTime::parse("2015-01T21:32:52Z").is_none());
        assert!(PrecisionDateTime::parse("2015-01-31T21:32:52.Z").is_none());
        assert!(PrecisionDateTime::parse("2015-01-31T21:32:52+15:00").is_none());
        assert!(PrecisionDateTime::parse("2015").is_some());
    }

    #[test]
    fn instants_need_seconds() {
        assert!(PrecisionInstant::parse("2015-02-07T13:28:17.239+02:00").is_some());
        assert!(PrecisionInstant::parse("2015-02-07").is_none());
    }

    #[test]
    fn times_have_no_zone() {
        let time = PrecisionTime::parse("08:30:00").expect("valid");
        assert_eq!(time.precision(), TimePrecision::Second);
        assert!(PrecisionTime::parse("08:30").is_none());
        assert!(PrecisionTime::parse("08:30:00Z").is_none());
        assert!(PrecisionTime::parse("24:00:00").is_none());
    }
}
