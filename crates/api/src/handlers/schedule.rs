use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use weekplan_core::{
    errors::ScheduleError,
    models::{
        day_schedule::{
            validate_day, CreateDayScheduleRequest, DayScheduleResponse, UpdateDayScheduleRequest,
        },
        time_slot::TimeSlotPayload,
    },
};
use weekplan_db::models::{DbDaySchedule, DbTimeSlot};

use crate::{extract::AppJson, middleware::error_handling::AppError, ApiState};

fn to_slot_payload(slot: DbTimeSlot) -> TimeSlotPayload {
    TimeSlotPayload {
        start: slot.start,
        stop: slot.stop,
        ids: slot.ids.map(|json| json.0),
        camera_ids: slot.camera_ids.map(|json| json.0),
    }
}

fn to_response(schedule: DbDaySchedule, slots: Vec<DbTimeSlot>) -> DayScheduleResponse {
    DayScheduleResponse {
        id: schedule.id,
        day: schedule.day,
        time_slots: slots.into_iter().map(to_slot_payload).collect(),
    }
}

/// Creates one new slot record per payload entry, in payload order, and
/// attaches each to the schedule's relation.
///
/// The inserts run as individual statements, not inside a transaction. A
/// failure partway leaves the slots attached so far in place.
async fn attach_payload_slots(
    pool: &PgPool,
    schedule_id: Uuid,
    slots: &[TimeSlotPayload],
) -> Result<(), AppError> {
    for (position, slot) in slots.iter().enumerate() {
        let db_slot = weekplan_db::repositories::time_slot::create_time_slot(
            pool,
            slot.start,
            slot.stop,
            slot.ids.clone(),
            slot.camera_ids.clone(),
        )
        .await
        .map_err(ScheduleError::Database)?;

        weekplan_db::repositories::time_slot::attach_time_slot(
            pool,
            schedule_id,
            db_slot.id,
            position as i32,
        )
        .await
        .map_err(ScheduleError::Database)?;
    }

    Ok(())
}

async fn load_aggregate(
    pool: &PgPool,
    schedule: DbDaySchedule,
) -> Result<DayScheduleResponse, AppError> {
    let slots =
        weekplan_db::repositories::time_slot::get_time_slots_by_schedule_id(pool, schedule.id)
            .await
            .map_err(ScheduleError::Database)?;

    Ok(to_response(schedule, slots))
}

#[axum::debug_handler]
pub async fn list_schedules(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<DayScheduleResponse>>, AppError> {
    let db_schedules = weekplan_db::repositories::day_schedule::list_day_schedules(&state.db_pool)
        .await
        .map_err(ScheduleError::Database)?;

    let mut schedules = Vec::with_capacity(db_schedules.len());
    for db_schedule in db_schedules {
        schedules.push(load_aggregate(&state.db_pool, db_schedule).await?);
    }

    Ok(Json(schedules))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DayScheduleResponse>, AppError> {
    let db_schedule =
        weekplan_db::repositories::day_schedule::get_day_schedule_by_id(&state.db_pool, id)
            .await
            .map_err(ScheduleError::Database)?
            .ok_or_else(|| ScheduleError::NotFound(format!("Schedule with ID {} not found", id)))?;

    Ok(Json(load_aggregate(&state.db_pool, db_schedule).await?))
}

#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<CreateDayScheduleRequest>,
) -> Result<(StatusCode, Json<DayScheduleResponse>), AppError> {
    validate_day(&payload.day)?;

    // Uniqueness probe; a race past this point surfaces as a store conflict.
    let taken =
        weekplan_db::repositories::day_schedule::day_exists(&state.db_pool, &payload.day, None)
            .await
            .map_err(ScheduleError::Database)?;
    if taken {
        return Err(AppError(ScheduleError::Validation(format!(
            "day: a schedule for {:?} already exists",
            payload.day
        ))));
    }

    let db_schedule =
        weekplan_db::repositories::day_schedule::create_day_schedule(&state.db_pool, &payload.day)
            .await
            .map_err(|err| map_day_write_error(err, &payload.day))?;

    attach_payload_slots(&state.db_pool, db_schedule.id, &payload.time_slots).await?;

    let response = load_aggregate(&state.db_pool, db_schedule).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateDayScheduleRequest>,
) -> Result<Json<DayScheduleResponse>, AppError> {
    weekplan_db::repositories::day_schedule::get_day_schedule_by_id(&state.db_pool, id)
        .await
        .map_err(ScheduleError::Database)?
        .ok_or_else(|| ScheduleError::NotFound(format!("Schedule with ID {} not found", id)))?;

    validate_day(&payload.day)?;

    // The record itself is excluded, so updating to the current day value
    // does not collide.
    let taken =
        weekplan_db::repositories::day_schedule::day_exists(&state.db_pool, &payload.day, Some(id))
            .await
            .map_err(ScheduleError::Database)?;
    if taken {
        return Err(AppError(ScheduleError::Validation(format!(
            "day: a schedule for {:?} already exists",
            payload.day
        ))));
    }

    let db_schedule =
        weekplan_db::repositories::day_schedule::update_day(&state.db_pool, id, &payload.day)
            .await
            .map_err(|err| map_day_write_error(err, &payload.day))?;

    // Full replace: detach every previously associated slot (the records
    // persist, unreferenced), then create and attach fresh ones.
    weekplan_db::repositories::time_slot::detach_time_slots(&state.db_pool, id)
        .await
        .map_err(ScheduleError::Database)?;
    attach_payload_slots(&state.db_pool, id, &payload.time_slots).await?;

    Ok(Json(load_aggregate(&state.db_pool, db_schedule).await?))
}

#[axum::debug_handler]
pub async fn delete_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted =
        weekplan_db::repositories::day_schedule::delete_day_schedule(&state.db_pool, id)
            .await
            .map_err(ScheduleError::Database)?;

    if deleted == 0 {
        return Err(AppError(ScheduleError::NotFound(format!(
            "Schedule with ID {} not found",
            id
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// A concurrent writer can slip past the uniqueness probe; the unique index
/// on `day` catches it at commit time and it surfaces as a conflict.
pub fn map_day_write_error(err: eyre::Report, day: &str) -> AppError {
    if weekplan_db::is_unique_violation(&err) {
        AppError(ScheduleError::Conflict(format!(
            "a schedule for {:?} was created concurrently",
            day
        )))
    } else {
        AppError(ScheduleError::Database(err))
    }
}
