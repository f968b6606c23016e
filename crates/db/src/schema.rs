use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create day_schedules table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS day_schedules (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            day VARCHAR(9) NOT NULL UNIQUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create time_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            start TIME NOT NULL,
            stop TIME NOT NULL,
            ids JSONB NULL,
            camera_ids JSONB NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedule_slots join table. The relation is many-to-many; join
    // rows go with their schedule, slot rows are never cascade-deleted.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedule_slots (
            schedule_id UUID NOT NULL REFERENCES day_schedules(id) ON DELETE CASCADE,
            slot_id UUID NOT NULL REFERENCES time_slots(id),
            position INT NOT NULL DEFAULT 0,
            PRIMARY KEY (schedule_id, slot_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per query
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_schedule_slots_schedule_id ON schedule_slots(schedule_id);",
        "CREATE INDEX IF NOT EXISTS idx_schedule_slots_slot_id ON schedule_slots(slot_id);",
        "CREATE INDEX IF NOT EXISTS idx_day_schedules_created_at ON day_schedules(created_at);",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
