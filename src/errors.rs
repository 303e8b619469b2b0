//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid day name: {0}")]
    InvalidDay(String),

    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid schedule descriptor: {0}")]
    InvalidSchedule(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Schedule already has an entry for {0}")]
    DuplicateScheduleDay(String),

    #[error("Cannot determine an attendance id for {0}")]
    UnresolvedIdentity(String),

    #[error("User {0} is already checked in on {1}")]
    AlreadyCheckedIn(String, String),

    #[error("User {0} has no open check-in")]
    NotCheckedIn(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
