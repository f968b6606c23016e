use chrono::NaiveTime;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbDaySchedule, DbTimeSlot};

// Mock repositories for testing
mock! {
    pub DayScheduleRepo {
        pub async fn create_day_schedule(
            &self,
            day: &'static str,
        ) -> eyre::Result<DbDaySchedule>;

        pub async fn get_day_schedule_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbDaySchedule>>;

        pub async fn list_day_schedules(
            &self,
        ) -> eyre::Result<Vec<DbDaySchedule>>;

        pub async fn day_exists(
            &self,
            day: &'static str,
            exclude: Option<Uuid>,
        ) -> eyre::Result<bool>;

        pub async fn update_day(
            &self,
            id: Uuid,
            day: &'static str,
        ) -> eyre::Result<DbDaySchedule>;

        pub async fn delete_day_schedule(
            &self,
            id: Uuid,
        ) -> eyre::Result<u64>;
    }
}

mock! {
    pub TimeSlotRepo {
        pub async fn create_time_slot(
            &self,
            start: NaiveTime,
            stop: NaiveTime,
            ids: Option<Vec<i64>>,
            camera_ids: Option<Vec<i64>>,
        ) -> eyre::Result<DbTimeSlot>;

        pub async fn attach_time_slot(
            &self,
            schedule_id: Uuid,
            slot_id: Uuid,
            position: i32,
        ) -> eyre::Result<()>;

        pub async fn get_time_slots_by_schedule_id(
            &self,
            schedule_id: Uuid,
        ) -> eyre::Result<Vec<DbTimeSlot>>;

        pub async fn detach_time_slots(
            &self,
            schedule_id: Uuid,
        ) -> eyre::Result<()>;
    }
}
