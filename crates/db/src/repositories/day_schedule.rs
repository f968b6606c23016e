use crate::models::DbDaySchedule;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_day_schedule(pool: &Pool<Postgres>, day: &str) -> Result<DbDaySchedule> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating day schedule: id={}, day={}", id, day);

    let schedule = sqlx::query_as::<_, DbDaySchedule>(
        r#"
        INSERT INTO day_schedules (id, day, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, day, created_at
        "#,
    )
    .bind(id)
    .bind(day)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Day schedule created successfully: id={}", id);
    Ok(schedule)
}

pub async fn get_day_schedule_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbDaySchedule>> {
    tracing::debug!("Getting day schedule by id: {}", id);

    let schedule = sqlx::query_as::<_, DbDaySchedule>(
        r#"
        SELECT id, day, created_at
        FROM day_schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if let Some(s) = &schedule {
        tracing::debug!("Day schedule found: id={}, day={}", s.id, s.day);
    } else {
        tracing::debug!("Day schedule not found: id={}", id);
    }

    Ok(schedule)
}

pub async fn list_day_schedules(pool: &Pool<Postgres>) -> Result<Vec<DbDaySchedule>> {
    let schedules = sqlx::query_as::<_, DbDaySchedule>(
        r#"
        SELECT id, day, created_at
        FROM day_schedules
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}

/// Uniqueness probe for the `day` label. On update the record being updated
/// is passed as `exclude` so a schedule may keep its own current day.
pub async fn day_exists(pool: &Pool<Postgres>, day: &str, exclude: Option<Uuid>) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM day_schedules
            WHERE day = $1 AND ($2::uuid IS NULL OR id <> $2)
        )
        "#,
    )
    .bind(day)
    .bind(exclude)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

pub async fn update_day(pool: &Pool<Postgres>, id: Uuid, day: &str) -> Result<DbDaySchedule> {
    tracing::debug!("Updating day schedule: id={}, day={}", id, day);

    let schedule = sqlx::query_as::<_, DbDaySchedule>(
        r#"
        UPDATE day_schedules
        SET day = $2
        WHERE id = $1
        RETURNING id, day, created_at
        "#,
    )
    .bind(id)
    .bind(day)
    .fetch_one(pool)
    .await?;

    Ok(schedule)
}

/// Removes the schedule record. Join rows cascade with it; previously
/// attached time slot records persist, unreferenced.
pub async fn delete_day_schedule(pool: &Pool<Postgres>, id: Uuid) -> Result<u64> {
    tracing::debug!("Deleting day schedule: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM day_schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
