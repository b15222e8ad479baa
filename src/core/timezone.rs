use chrono::{DateTime, FixedOffset, Utc};

/// India Standard Time offset (UTC+05:30)
const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// Record timestamps are stored as UTC and only shifted to IST for display
pub struct TimezoneConverter;

impl TimezoneConverter {
    fn ist() -> FixedOffset {
        FixedOffset::east_opt(IST_OFFSET_SECONDS).expect("Valid offset")
    }

    /// Convert UTC timestamp to India Standard Time
    pub fn utc_to_ist(utc_time: DateTime<Utc>) -> DateTime<FixedOffset> {
        utc_time.with_timezone(&Self::ist())
    }

    /// Convert an IST timestamp back to UTC
    pub fn ist_to_utc(ist_time: DateTime<FixedOffset>) -> DateTime<Utc> {
        ist_time.with_timezone(&Utc)
    }
}

/// Format timestamp as ISO 8601 UTC, the shape persisted in `date`
pub fn format_iso8601(utc_time: DateTime<Utc>) -> String {
    utc_time.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Short date as shown in the records list, e.g. `17 Oct 2026`
pub fn format_record_date(utc_time: DateTime<Utc>) -> String {
    TimezoneConverter::utc_to_ist(utc_time)
        .format("%-d %b %Y")
        .to_string()
}

/// Serde adapter writing timestamps as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub mod iso8601_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_iso8601(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
