pub mod escape_time;
pub mod factory;
pub mod kinds;
pub mod recurrence;
