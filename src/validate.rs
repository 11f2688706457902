use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::AppError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Accumulates field-level errors so a caller gets every problem in one
/// response instead of the first one hit.
#[derive(Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "is required");
        }
    }

    pub fn max_len(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(field, format!("must be at most {max} characters"));
        }
    }

    pub fn email(&mut self, field: &'static str, value: &str) {
        if !value.trim().is_empty() && !EMAIL_RE.is_match(value) {
            self.push(field, "is not a valid email address");
        }
    }

    pub fn check(&mut self, field: &'static str, ok: bool, message: &str) {
        if !ok {
            self.push(field, message);
        }
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

pub fn client(email: &str, first_name: &str, last_name: &str, patronymic: Option<&str>) -> Result<(), AppError> {
    let mut v = Validator::new();
    v.require("email", email);
    v.email("email", email);
    v.require("first_name", first_name);
    v.max_len("first_name", first_name, 20);
    v.require("last_name", last_name);
    v.max_len("last_name", last_name, 30);
    if let Some(patronymic) = patronymic {
        v.max_len("patronymic", patronymic, 30);
    }
    v.finish()
}

pub fn message(subject: &str) -> Result<(), AppError> {
    let mut v = Validator::new();
    v.require("subject", subject);
    v.max_len("subject", subject, 100);
    v.finish()
}

pub fn mailing(
    start_at: chrono::DateTime<chrono::Utc>,
    end_at: chrono::DateTime<chrono::Utc>,
) -> Result<(), AppError> {
    let mut v = Validator::new();
    v.check("end_at", end_at >= start_at, "must not be before start_at");
    v.finish()
}

pub fn registration(email: &str, password: &str) -> Result<(), AppError> {
    let mut v = Validator::new();
    v.require("email", email);
    v.email("email", email);
    v.check(
        "password",
        password.len() >= 8,
        "must be at least 8 characters",
    );
    v.finish()
}
