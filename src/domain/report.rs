//! Report model

use chrono::NaiveDate;

/// Отчёт об отработанных часах за один день.
///
/// Every report belongs to exactly one user and is deleted together
/// with it (cascade).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Identifier, assigned by the database on insert. Immutable afterwards.
    pub id: i32,
    pub comment: String,
    pub hours_count: i32,
    /// Calendar date, no time component.
    pub date: NaiveDate,
    /// Owning user. Set at creation, never transferred.
    pub user_id: i32,
}

/// Report fields for creation, before an id exists.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub comment: String,
    pub hours_count: i32,
    pub date: NaiveDate,
}
