pub mod activity;
pub mod attendance;
pub mod category;
pub mod person;
pub mod schedule;
pub mod session_status;
