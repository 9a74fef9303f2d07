use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::AppError;

/// Zone in which date strings are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Zone {
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Zone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Zone::Fixed(Utc.fix()));
        }
        trimmed
            .parse::<FixedOffset>()
            .map(Zone::Fixed)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Zone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Zone::Fixed(offset) => utc.with_timezone(&offset),
        }
    }

    /// Attach this zone to a wall-clock time. `None` when the local time
    /// does not exist (DST gap); on a fold the earlier instant wins.
    pub(crate) fn localize(self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Zone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            Zone::Fixed(offset) => offset.from_local_datetime(&naive).single(),
        }
    }
}

/// "Now" and the zone it was read in, passed explicitly to the normalizer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReferenceClock {
    now: DateTime<FixedOffset>,
    zone: Zone,
}

impl ReferenceClock {
    pub(crate) fn system(zone: Zone) -> Self {
        Self {
            now: zone.to_fixed_offset(Utc::now()),
            zone,
        }
    }

    #[cfg(test)]
    pub(crate) fn fixed(now: DateTime<FixedOffset>, zone: Zone) -> Self {
        Self { now, zone }
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    pub(crate) fn zone(&self) -> Zone {
        self.zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_none_returns_local() {
        assert_eq!(Zone::parse(None).unwrap(), Zone::Local);
    }

    #[test]
    fn parse_empty_and_local_strings() {
        assert_eq!(Zone::parse(Some("")).unwrap(), Zone::Local);
        assert_eq!(Zone::parse(Some("local")).unwrap(), Zone::Local);
        assert_eq!(Zone::parse(Some("LOCAL")).unwrap(), Zone::Local);
        assert_eq!(Zone::parse(Some("  Local  ")).unwrap(), Zone::Local);
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z"] {
            let zone = Zone::parse(Some(raw)).unwrap();
            assert_eq!(zone, Zone::Fixed(Utc.fix()), "{raw}");
        }
    }

    #[test]
    fn parse_offset() {
        let zone = Zone::parse(Some("+02:00")).unwrap();
        assert_eq!(
            zone,
            Zone::Fixed(FixedOffset::east_opt(2 * 3600).unwrap())
        );
        let zone = Zone::parse(Some("-05:30")).unwrap();
        assert_eq!(
            zone,
            Zone::Fixed(FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap())
        );
    }

    #[test]
    fn parse_named_timezone_is_rejected() {
        let err = Zone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
        assert!(Zone::parse(Some("America/New_York")).is_err());
    }

    #[test]
    fn to_fixed_offset_shifts_time() {
        let utc = "2026-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let zone = Zone::parse(Some("-04:00")).unwrap();
        let fixed = zone.to_fixed_offset(utc);
        assert_eq!(fixed.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(fixed.format("%H:%M").to_string(), "08:00");
    }

    #[test]
    fn localize_fixed_keeps_wall_clock() {
        let zone = Zone::parse(Some("+01:00")).unwrap();
        let naive = NaiveDate::from_ymd_opt(2020, 1, 2)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let dt = zone.localize(naive).unwrap();
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn localize_local_resolves_ordinary_time() {
        let naive = NaiveDate::from_ymd_opt(2020, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let dt = Zone::Local.localize(naive).unwrap();
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn clock_today_uses_reference_now() {
        let now = "2024-03-10T23:30:00+00:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let clock = ReferenceClock::fixed(now, Zone::Fixed(Utc.fix()));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }
}
