use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    CheckedIn,
    CheckedOut,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::CheckedIn => "Checked in",
            ActivityKind::CheckedOut => "Checked out",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::CheckedIn => "📍",
            ActivityKind::CheckedOut => "👋",
        }
    }
}

/// A feed line synthesised from an attendance record.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEvent {
    pub name: String,
    pub kind: ActivityKind,
    /// `None` when the record's date/time did not parse.
    pub instant: Option<NaiveDateTime>,
    pub time_text: String,
    pub date_text: String,
    pub label: String,
}
