use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_code(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            _ => Err(AppError::InvalidGender(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Student,
    /// Teachers, staff and admins share the staff column.
    Staff,
}

impl Role {
    pub fn from_code(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "staff" | "teacher" | "admin" => Ok(Role::Staff),
            _ => Err(AppError::InvalidRole(s.to_string())),
        }
    }

    /// Campus addresses carry `student` in the domain part.
    pub fn infer_from_email(email: &str) -> Self {
        if email.to_lowercase().contains("student") {
            Role::Student
        } else {
            Role::Staff
        }
    }
}

/// Which schedule column applies to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    MaleStudent,
    FemaleStudent,
    Staff,
}

impl Category {
    /// Total mapping; an unset gender counts as male.
    pub fn select(role: Role, gender: Option<Gender>) -> Self {
        match (role, gender) {
            (Role::Student, Some(Gender::Female)) => Category::FemaleStudent,
            (Role::Student, _) => Category::MaleStudent,
            (Role::Staff, _) => Category::Staff,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::MaleStudent => "Male Student",
            Category::FemaleStudent => "Female Student",
            Category::Staff => "Teacher/Staff",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_mapping_is_total() {
        assert_eq!(
            Category::select(Role::Student, Some(Gender::Female)),
            Category::FemaleStudent
        );
        assert_eq!(
            Category::select(Role::Student, Some(Gender::Male)),
            Category::MaleStudent
        );
        assert_eq!(Category::select(Role::Student, None), Category::MaleStudent);
        assert_eq!(
            Category::select(Role::Staff, Some(Gender::Female)),
            Category::Staff
        );
        assert_eq!(Category::select(Role::Staff, None), Category::Staff);
    }

    #[test]
    fn role_inference() {
        assert_eq!(
            Role::infer_from_email("u2104128@Student.cuet.ac.bd"),
            Role::Student
        );
        assert_eq!(Role::infer_from_email("teacher@cuet.ac.bd"), Role::Staff);
        assert_eq!(Role::from_code("Teacher").unwrap(), Role::Staff);
        assert!(Role::from_code("janitor").is_err());
    }
}
