use crate::models::DbTimeSlot;
use chrono::{NaiveTime, Utc};
use eyre::Result;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_time_slot(
    pool: &Pool<Postgres>,
    start: NaiveTime,
    stop: NaiveTime,
    ids: Option<Vec<i64>>,
    camera_ids: Option<Vec<i64>>,
) -> Result<DbTimeSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        INSERT INTO time_slots (id, start, stop, ids, camera_ids, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, start, stop, ids, camera_ids, created_at
        "#,
    )
    .bind(id)
    .bind(start)
    .bind(stop)
    .bind(ids.map(Json))
    .bind(camera_ids.map(Json))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(time_slot)
}

/// Attaches an existing slot to a schedule. `position` records payload order
/// so serialization returns slots in the order they were supplied.
pub async fn attach_time_slot(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
    slot_id: Uuid,
    position: i32,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO schedule_slots (schedule_id, slot_id, position)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(schedule_id)
    .bind(slot_id)
    .bind(position)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_time_slots_by_schedule_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<Vec<DbTimeSlot>> {
    let time_slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT ts.id, ts.start, ts.stop, ts.ids, ts.camera_ids, ts.created_at
        FROM time_slots ts
        JOIN schedule_slots ss ON ss.slot_id = ts.id
        WHERE ss.schedule_id = $1
        ORDER BY ss.position ASC
        "#,
    )
    .bind(schedule_id)
    .fetch_all(pool)
    .await?;

    Ok(time_slots)
}

/// Clears a schedule's slot relation ahead of a full-replace update. Only the
/// join rows are deleted; the detached slot records remain persisted.
pub async fn detach_time_slots(pool: &Pool<Postgres>, schedule_id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM schedule_slots
        WHERE schedule_id = $1
        "#,
    )
    .bind(schedule_id)
    .execute(pool)
    .await?;

    Ok(())
}
