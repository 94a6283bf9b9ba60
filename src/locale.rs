//! Русскоязычные тексты ошибок.
//!
//! All human-readable messages live here so the wording stays a locale
//! resource rather than part of the protocol. Handlers and validators
//! only ever reference these constructors.

pub fn user_not_found(id: i32) -> String {
    format!("Пользователь с идентификатором {} не найден", id)
}

pub fn user_id_mismatch() -> String {
    "Идентификатор пользователя в запросе не совпадает с идентификатором в теле запроса."
        .to_string()
}

pub fn email_taken(email: &str) -> String {
    format!("Пользователь с email {} уже существует", email)
}

pub fn user_update_target_missing(id: i32) -> String {
    format!(
        "Не удалось выполнить обновление данных пользователя с идентификатором {}. \
         Указанный пользователь не существует.",
        id
    )
}

pub fn report_not_found(user_id: i32, id: i32) -> String {
    format!(
        "У пользователя {} отсутствует отчёт с идентификатором {}",
        user_id, id
    )
}

pub fn report_id_mismatch() -> String {
    "Идентификатор отчёта в запросе не совпадает с идентификатором в теле запроса.".to_string()
}

pub fn report_update_target_missing(user_id: i32, id: i32) -> String {
    format!(
        "Не удалось выполнить обновление отчётов пользователя с идентификатором {}. \
         У пользователя отсутствует отчёт с идентификатором {}.",
        user_id, id
    )
}

pub fn internal_error() -> String {
    "Внутренняя ошибка сервера.".to_string()
}

// ── Validation messages ────────────────────────────────────────

pub fn param_missing(name: &str) -> String {
    format!("Параметр '{}' отсутствует в запросе.", name)
}

pub fn param_empty(name: &str) -> String {
    format!("Параметр '{}' не должен быть пустым.", name)
}

pub fn param_too_long(name: &str, max: usize) -> String {
    format!(
        "Длина параметра '{}' не должна превышать {} символов.",
        name, max
    )
}

pub fn param_below_min(name: &str, min: i32) -> String {
    format!("Параметр '{}' не может иметь значение меньше {}", name, min)
}
