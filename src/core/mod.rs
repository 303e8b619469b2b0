pub mod checkin;
pub mod dashboard;
pub mod feed;
pub mod log;
pub mod provider;
pub mod resolver;
pub mod schedule;
