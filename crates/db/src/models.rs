use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDaySchedule {
    pub id: Uuid,
    pub day: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlot {
    pub id: Uuid,
    pub start: NaiveTime,
    pub stop: NaiveTime,
    pub ids: Option<Json<Vec<i64>>>,
    pub camera_ids: Option<Json<Vec<i64>>>,
    pub created_at: DateTime<Utc>,
}
