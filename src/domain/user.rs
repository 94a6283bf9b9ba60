//! User model

/// Пользователь — владелец отчётов об отработанных часах.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Identifier, assigned by the database on insert. Immutable afterwards.
    pub id: i32,
    /// Globally unique, compared case-sensitively.
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
}

/// User fields for creation, before an id exists.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
}
