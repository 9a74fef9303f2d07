//! Flexible date/time string normalization
//!
//! Accepts the handful of shapes people actually type on the command line
//! (`13:42`, `2010-02-26`, `26.02.2010 12:34`, `20100226`, ...) and resolves
//! them against an explicit [`ReferenceClock`].

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike};
use regex::{Regex, RegexBuilder};

use crate::consts::DATETIME_FORMAT;
use crate::error::AppError;
use crate::utils::timezone::ReferenceClock;

const TIME: &str = r"(?P<hour>[0-2]?\d)\s*:\s*(?P<minute>[0-5]\d)";
const YEAR_FIRST: &str =
    r"(?P<year>2\d{3})\s*[-.]?\s*(?P<month>[01]?\d)\s*[-.]?\s*(?P<day>[0-3]?\d)";
const DAY_FIRST: &str =
    r"(?P<day>[0-3]?\d)\s*[-.]?\s*(?P<month>[01]?\d)\s*[-.]?\s*(?P<year>2\d{3})";

/// Date and time fields picked out of the input; anything absent is
/// filled in from the reference clock (date) or midnight (time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PartialStamp {
    date: Option<(i32, u32, u32)>,
    time: Option<(u32, u32)>,
}

struct Matcher {
    regex: Regex,
}

impl Matcher {
    fn new(body: &str) -> Self {
        let regex = RegexBuilder::new(&format!(r"^\s*{body}\s*$"))
            .case_insensitive(true)
            .build()
            .expect("date pattern must compile");
        Self { regex }
    }

    fn matches(&self, input: &str) -> Option<PartialStamp> {
        let caps = self.regex.captures(input)?;
        let field = |name: &str| caps.name(name).map(|m| m.as_str());

        let date = match (field("year"), field("month"), field("day")) {
            (Some(y), Some(m), Some(d)) => Some((y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)),
            _ => None,
        };
        let time = match (field("hour"), field("minute")) {
            (Some(h), Some(m)) => Some((h.parse().ok()?, m.parse().ok()?)),
            _ => None,
        };
        Some(PartialStamp { date, time })
    }
}

/// Tried in order, first match wins.
static MATCHERS: LazyLock<Vec<Matcher>> = LazyLock::new(|| {
    vec![
        Matcher::new(TIME),
        Matcher::new(YEAR_FIRST),
        Matcher::new(&format!(r"{YEAR_FIRST}\s*{TIME}")),
        Matcher::new(DAY_FIRST),
        Matcher::new(&format!(r"{DAY_FIRST}\s*{TIME}")),
    ]
});

/// A fully resolved point in time. Only [`DateNormalizer`] builds these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct NormalizedTimestamp(DateTime<FixedOffset>);

impl NormalizedTimestamp {
    pub(crate) fn year(&self) -> i32 {
        self.0.year()
    }

    pub(crate) fn month(&self) -> u32 {
        self.0.month()
    }

    pub(crate) fn day(&self) -> u32 {
        self.0.day()
    }

    pub(crate) fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub(crate) fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub(crate) fn second(&self) -> u32 {
        self.0.second()
    }

    pub(crate) fn date_time(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Wall-clock time as the number `YYYYMMDDHHMMSS`, comparable with
    /// the stamps embedded in record file names.
    pub(crate) fn comparison_key(&self) -> u64 {
        u64::from(self.year().unsigned_abs()) * 10_000_000_000
            + u64::from(self.month()) * 100_000_000
            + u64::from(self.day()) * 1_000_000
            + u64::from(self.hour()) * 10_000
            + u64::from(self.minute()) * 100
            + u64::from(self.second())
    }

    /// Round anything in the midnight hour up to 23:59:59 of the same day.
    /// Used for the upper bound of a range given as a bare date.
    pub(crate) fn end_of_day_if_midnight(self) -> Self {
        if self.hour() != 0 {
            return self;
        }
        let end = self
            .0
            .date_naive()
            .and_hms_opt(23, 59, 59)
            .and_then(|naive| self.0.offset().from_local_datetime(&naive).single());
        end.map(NormalizedTimestamp).unwrap_or(self)
    }
}

impl fmt::Display for NormalizedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATETIME_FORMAT))
    }
}

pub(crate) struct DateNormalizer {
    clock: ReferenceClock,
}

impl DateNormalizer {
    pub(crate) fn new(clock: ReferenceClock) -> Self {
        Self { clock }
    }

    pub(crate) fn normalize(&self, raw: &str) -> Result<NormalizedTimestamp, AppError> {
        let input = raw.trim();
        let partial = MATCHERS
            .iter()
            .find_map(|m| m.matches(input))
            .ok_or_else(|| AppError::InvalidFormat {
                input: input.to_string(),
            })?;

        let calendar_invalid = || AppError::CalendarInvalid {
            input: input.to_string(),
        };

        let date = match partial.date {
            Some((year, month, day)) => {
                NaiveDate::from_ymd_opt(year, month, day).ok_or_else(calendar_invalid)?
            }
            None => self.clock.today(),
        };
        let (hour, minute) = partial.time.unwrap_or((0, 0));
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(calendar_invalid)?;
        let resolved = self
            .clock
            .zone()
            .localize(date.and_time(time))
            .ok_or_else(calendar_invalid)?;

        log::debug!("normalized {input:?} to {resolved}");
        Ok(NormalizedTimestamp(resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timezone::Zone;
    use chrono::Utc;
    use chrono::offset::Offset;

    fn normalizer() -> DateNormalizer {
        let now = "2024-03-10T15:04:05+00:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        DateNormalizer::new(ReferenceClock::fixed(now, Zone::Fixed(Utc.fix())))
    }

    fn fields(ts: NormalizedTimestamp) -> (i32, u32, u32, u32, u32, u32) {
        (
            ts.year(),
            ts.month(),
            ts.day(),
            ts.hour(),
            ts.minute(),
            ts.second(),
        )
    }

    #[test]
    fn time_only_uses_reference_day() {
        let ts = normalizer().normalize("13:42").unwrap();
        assert_eq!(fields(ts), (2024, 3, 10, 13, 42, 0));
    }

    #[test]
    fn single_digit_hour() {
        let ts = normalizer().normalize("9:05").unwrap();
        assert_eq!(fields(ts), (2024, 3, 10, 9, 5, 0));
    }

    #[test]
    fn year_first_date_is_midnight() {
        let ts = normalizer().normalize("2010-02-26").unwrap();
        assert_eq!(fields(ts), (2010, 2, 26, 0, 0, 0));
    }

    #[test]
    fn year_first_separators() {
        let n = normalizer();
        for raw in ["2010-02-26", "2010.02.26", "20100226", "2010-2-26", " 2010 . 02 . 26 "] {
            let ts = n.normalize(raw).unwrap();
            assert_eq!(fields(ts), (2010, 2, 26, 0, 0, 0), "{raw}");
        }
    }

    #[test]
    fn year_first_date_time() {
        let ts = normalizer().normalize("2010.02.26 12:34").unwrap();
        assert_eq!(fields(ts), (2010, 2, 26, 12, 34, 0));
    }

    #[test]
    fn day_first_date() {
        let ts = normalizer().normalize("26-02-2010").unwrap();
        assert_eq!(fields(ts), (2010, 2, 26, 0, 0, 0));
        let ts = normalizer().normalize("26022010").unwrap();
        assert_eq!(fields(ts), (2010, 2, 26, 0, 0, 0));
    }

    #[test]
    fn day_first_date_time() {
        let ts = normalizer().normalize("26.02.2010 08:15").unwrap();
        assert_eq!(fields(ts), (2010, 2, 26, 8, 15, 0));
    }

    #[test]
    fn round_trips_every_shape() {
        let n = normalizer();
        let cases = [
            ("17:20", "%H:%M"),
            ("2021-07-04", "%Y-%m-%d"),
            ("2021-07-04 17:20", "%Y-%m-%d %H:%M"),
            ("04-07-2021", "%d-%m-%Y"),
            ("04-07-2021 17:20", "%d-%m-%Y %H:%M"),
        ];
        for (raw, shape) in cases {
            let first = n.normalize(raw).unwrap();
            let again = first.date_time().format(shape).to_string();
            assert_eq!(again, raw);
            assert_eq!(n.normalize(&again).unwrap(), first, "{raw}");
        }
    }

    #[test]
    fn unrecognized_input_is_invalid_format() {
        let n = normalizer();
        for raw in ["not-a-date", "", "1999-01-01", "2010-02-26T12:34", "yesterday"] {
            let err = n.normalize(raw).unwrap_err();
            assert!(matches!(err, AppError::InvalidFormat { .. }), "{raw}: {err}");
        }
    }

    #[test]
    fn calendar_invalid_is_propagated() {
        let n = normalizer();
        for raw in ["2010-02-31", "2010-00-10", "2010-19-01", "27:00", "31-04-2010"] {
            let err = n.normalize(raw).unwrap_err();
            assert!(matches!(err, AppError::CalendarInvalid { .. }), "{raw}: {err}");
        }
    }

    #[test]
    fn comparison_key_is_fourteen_digits() {
        let ts = normalizer().normalize("2020-01-02 09:30").unwrap();
        assert_eq!(ts.comparison_key(), 20200102093000);
    }

    #[test]
    fn end_of_day_rounds_the_midnight_hour() {
        let n = normalizer();
        let midnight = n.normalize("2020-01-04").unwrap().end_of_day_if_midnight();
        assert_eq!(fields(midnight), (2020, 1, 4, 23, 59, 59));

        let half_past = n.normalize("2020-01-04 00:30").unwrap().end_of_day_if_midnight();
        assert_eq!(fields(half_past), (2020, 1, 4, 23, 59, 59));

        let one_am = n.normalize("2020-01-04 01:00").unwrap();
        assert_eq!(one_am.end_of_day_if_midnight(), one_am);

        let afternoon = n.normalize("2020-01-04 14:00").unwrap();
        assert_eq!(afternoon.end_of_day_if_midnight(), afternoon);
    }

    #[test]
    fn display_format() {
        let ts = normalizer().normalize("2010.02.26 12:34").unwrap();
        assert_eq!(ts.to_string(), "2010-02-26 12:34:00");
    }
}
