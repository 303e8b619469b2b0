use super::category::{Category, Gender, Role};
use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static STUDENT_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^u(\d+)@student\.cuet\.ac\.bd$").unwrap());

/// Profile of the person asking for their status or history.
#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub gender: Option<Gender>,
    pub role: Role,
    pub member_id: Option<String>,
    /// Login account id, used only when nothing else identifies the person.
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource {
    MemberId,
    Email,
    Account,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceId {
    pub id: String,
    pub source: IdSource,
    /// Set when the email encodes a different id than `member_id`.
    pub conflict: Option<String>,
}

/// Digits of a `u<digits>@student.cuet.ac.bd` address.
pub fn id_from_email(email: &str) -> Option<String> {
    STUDENT_EMAIL
        .captures(email.trim())
        .map(|caps| caps[1].to_string())
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Person {
    /// Role defaults to what the email suggests.
    pub fn new(email: &str) -> Self {
        Self {
            name: String::new(),
            email: email.to_string(),
            gender: None,
            role: Role::infer_from_email(email),
            member_id: None,
            account_id: None,
        }
    }

    pub fn category(&self) -> Category {
        Category::select(self.role, self.gender)
    }

    /// `member_id` wins; the email is only parsed when it is missing, and the
    /// account id is the last resort.
    pub fn attendance_id(&self) -> AppResult<AttendanceId> {
        let parsed = id_from_email(&self.email);

        if let Some(id) = non_blank(&self.member_id) {
            return Ok(AttendanceId {
                id: id.to_string(),
                source: IdSource::MemberId,
                conflict: parsed.filter(|p| p != id),
            });
        }

        parsed
            .map(|id| AttendanceId {
                id,
                source: IdSource::Email,
                conflict: None,
            })
            .or_else(|| {
                non_blank(&self.account_id).map(|id| AttendanceId {
                    id: id.to_string(),
                    source: IdSource::Account,
                    conflict: None,
                })
            })
            .ok_or_else(|| {
                let who = if self.email.is_empty() {
                    self.name.clone()
                } else {
                    self.email.clone()
                };
                AppError::UnresolvedIdentity(who)
            })
    }
}
