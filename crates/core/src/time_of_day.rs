//! Serde codec for time-of-day fields.
//!
//! Slot boundaries are clock times with no date component, carried on the wire
//! as `"HH:MM"`. Input also accepts `"HH:MM:SS"`; output is always `"HH:MM"`.

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serializer};

const WIRE_FORMAT: &str = "%H:%M";

pub fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(raw, "%H:%M").or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
}

pub fn format(time: &NaiveTime) -> String {
    time.format(WIRE_FORMAT).to_string()
}

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(time))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|_| {
        de::Error::custom(format!(
            "invalid time of day {raw:?}, expected \"HH:MM\" or \"HH:MM:SS\""
        ))
    })
}
