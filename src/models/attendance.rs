use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceStatus {
    Present,
    CheckedOut,
}

impl AttendanceStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::CheckedOut => "Checked Out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Present" => Some(AttendanceStatus::Present),
            "Checked Out" => Some(AttendanceStatus::CheckedOut),
            _ => None,
        }
    }
}

/// One visit: created at check-in, completed once at check-out.
///
/// `date` and the times are kept as entered (`YYYY-MM-DD`, `hh:mm AM`) so that
/// records written by other clients survive even when they do not parse.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub gender: String,
    pub hall: String,
    pub date: String,
    pub time: String,
    pub exit_time: Option<String>,
    pub status: AttendanceStatus,
}
