use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::time_of_day;

/// Wire representation of a single time slot, used both in request payloads
/// and in serialized schedule responses.
///
/// `ids` and `camera_ids` are opaque lists of external references. They are
/// optional and emitted as `null` when absent. `camera_ids` is reserved and
/// never populated by the service itself, but accepted and echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotPayload {
    #[serde(with = "time_of_day")]
    pub start: NaiveTime,
    #[serde(with = "time_of_day")]
    pub stop: NaiveTime,
    #[serde(default)]
    pub ids: Option<Vec<i64>>,
    #[serde(default)]
    pub camera_ids: Option<Vec<i64>>,
}
