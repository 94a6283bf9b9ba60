//! Per-field request validation.
//!
//! Each DTO has one pure function returning every failure in declared
//! field order; within a field, "missing" comes before "empty" before
//! "too long". Handlers surface only the first message, the full list
//! exists for composition and testing.

use crate::api::dto::{ReportDto, UserDto};
use crate::locale;

const EMAIL_MAX: usize = 254;
const NAME_MAX: usize = 100;
const COMMENT_MAX: usize = 5000;
const HOURS_MIN: i32 = 1;

fn check_required_string(name: &str, value: Option<&str>, max: usize, failures: &mut Vec<String>) {
    match value {
        None => failures.push(locale::param_missing(name)),
        Some(s) if s.is_empty() => failures.push(locale::param_empty(name)),
        Some(s) if s.chars().count() > max => failures.push(locale::param_too_long(name, max)),
        Some(_) => {}
    }
}

fn check_optional_string(name: &str, value: Option<&str>, max: usize, failures: &mut Vec<String>) {
    if let Some(s) = value {
        if s.chars().count() > max {
            failures.push(locale::param_too_long(name, max));
        }
    }
}

/// Validate a user representation. Field order: email, name, lastName,
/// patronymic.
pub fn validate_user(dto: &UserDto) -> Vec<String> {
    let mut failures = Vec::new();
    check_required_string("email", dto.email.as_deref(), EMAIL_MAX, &mut failures);
    check_required_string("name", dto.name.as_deref(), NAME_MAX, &mut failures);
    check_required_string("lastName", dto.last_name.as_deref(), NAME_MAX, &mut failures);
    check_optional_string("patronymic", dto.patronymic.as_deref(), NAME_MAX, &mut failures);
    failures
}

/// Validate a report representation. Field order: comment, hoursCount,
/// date.
pub fn validate_report(dto: &ReportDto) -> Vec<String> {
    let mut failures = Vec::new();
    check_required_string("comment", dto.comment.as_deref(), COMMENT_MAX, &mut failures);
    match dto.hours_count {
        None => failures.push(locale::param_missing("hoursCount")),
        Some(h) if h < HOURS_MIN => failures.push(locale::param_below_min("hoursCount", HOURS_MIN)),
        Some(_) => {}
    }
    if dto.date.is_none() {
        failures.push(locale::param_missing("date"));
    }
    failures
}

// ── Tests ──────────────────────────────────────────────────────
