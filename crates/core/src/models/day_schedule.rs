use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::time_slot::TimeSlotPayload;

/// Maximum length of a day label, matching the longest weekday name.
/// No enumeration to the seven weekday names is enforced.
pub const MAX_DAY_LEN: usize = 9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDayScheduleRequest {
    pub day: String,
    #[serde(default)]
    pub time_slots: Vec<TimeSlotPayload>,
}

/// Update payload. Updates are full replacements, so the shape is identical
/// to the create payload; PATCH shares this type with PUT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDayScheduleRequest {
    pub day: String,
    #[serde(default)]
    pub time_slots: Vec<TimeSlotPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayScheduleResponse {
    pub id: Uuid,
    pub day: String,
    pub time_slots: Vec<TimeSlotPayload>,
}

/// Field-level checks shared by the create and update paths. Uniqueness of
/// `day` is a store concern and checked separately.
pub fn validate_day(day: &str) -> ScheduleResult<()> {
    if day.is_empty() {
        return Err(ScheduleError::Validation(
            "day: this field may not be blank".to_string(),
        ));
    }
    // Character count, not bytes; the column limit counts characters.
    if day.chars().count() > MAX_DAY_LEN {
        return Err(ScheduleError::Validation(format!(
            "day: ensure this field has no more than {MAX_DAY_LEN} characters"
        )));
    }
    Ok(())
}
