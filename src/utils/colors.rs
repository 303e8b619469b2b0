//! Terminal colours for status titles and feed lines.

use crate::models::activity::ActivityKind;
use crate::models::session_status::SessionStatus;
use ansi_term::{Colour, Style};

pub fn status_style(status: &SessionStatus) -> Style {
    match status {
        SessionStatus::InProgress { .. } => Colour::Green.bold(),
        SessionStatus::UpcomingToday { .. } | SessionStatus::UpcomingFutureDay { .. } => {
            Colour::Blue.bold()
        }
        SessionStatus::NoneFound => Colour::Fixed(245).normal(),
    }
}

pub fn activity_style(kind: ActivityKind) -> Style {
    match kind {
        ActivityKind::CheckedIn => Colour::Green.normal(),
        ActivityKind::CheckedOut => Colour::Fixed(245).normal(),
    }
}
