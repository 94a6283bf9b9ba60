//! Wire representations (DTOs) and their conversions.
//!
//! Conversions between DTOs and domain models are written out field by
//! field in both directions, so a DTO shape change fails at compile
//! time instead of silently dropping data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewReport, NewUser, Report, User};

/// Тело ошибки.
///
/// Все ошибочные ответы (400/404/409) имеют эту форму.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Человекочитаемое описание ошибки
    pub message: String,
}

/// Пользователь.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Идентификатор. Назначается системой; в теле POST игнорируется,
    /// в теле PUT должен совпадать с идентификатором в пути.
    #[serde(default)]
    #[schema(read_only)]
    pub id: i32,
    /// Email, уникален среди всех пользователей (до 254 символов)
    pub email: Option<String>,
    /// Имя (до 100 символов)
    pub name: Option<String>,
    /// Фамилия (до 100 символов)
    pub last_name: Option<String>,
    /// Отчество (до 100 символов, необязательно)
    pub patronymic: Option<String>,
    /// Отчёты пользователя. Принимаются структурно на входе, но не
    /// используются; в ответах не сериализуются — получайте отчёты
    /// через `/api/users/{userId}/reports`.
    #[serde(default, skip_serializing)]
    #[schema(write_only)]
    pub reports: Vec<ReportDto>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: Some(u.email),
            name: Some(u.name),
            last_name: Some(u.last_name),
            patronymic: u.patronymic,
            reports: Vec::new(),
        }
    }
}

impl UserDto {
    /// Convert to a domain user under `id`. Callers validate first;
    /// absent required fields degrade to empty strings rather than
    /// panicking.
    pub fn to_domain(&self, id: i32) -> User {
        User {
            id,
            email: self.email.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            patronymic: self.patronymic.clone(),
        }
    }

    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            email: self.email.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            patronymic: self.patronymic.clone(),
        }
    }
}

/// Отчёт об отработанных часах.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    /// Идентификатор. Назначается системой; в теле POST игнорируется,
    /// в теле PUT должен совпадать с идентификатором в пути.
    #[serde(default)]
    #[schema(read_only)]
    pub id: i32,
    /// Комментарий (до 5000 символов)
    pub comment: Option<String>,
    /// Количество часов (не меньше 1)
    pub hours_count: Option<i32>,
    /// Дата отчёта (календарная, без времени)
    pub date: Option<NaiveDate>,
}

impl From<Report> for ReportDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            comment: Some(r.comment),
            hours_count: Some(r.hours_count),
            date: Some(r.date),
        }
    }
}

impl ReportDto {
    /// Convert to a domain report owned by `user_id` under `id`.
    /// Callers validate first.
    pub fn to_domain(&self, id: i32, user_id: i32) -> Report {
        Report {
            id,
            comment: self.comment.clone().unwrap_or_default(),
            hours_count: self.hours_count.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            user_id,
        }
    }

    pub fn to_new_report(&self) -> NewReport {
        NewReport {
            comment: self.comment.clone().unwrap_or_default(),
            hours_count: self.hours_count.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
