pub mod day_schedule;
pub mod time_slot;
