//! Request-scoped persistence gateway.
//!
//! A [`UnitOfWork`] wraps a single database transaction: a handler opens
//! one at the start of the request, stages every change through it and
//! persists everything with one [`UnitOfWork::commit`] call. Dropping an
//! uncommitted unit of work rolls the transaction back, which makes the
//! bulk endpoints all-or-nothing.

use chrono::{Datelike, Months, NaiveDate};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use crate::domain::{DomainError, DomainResult, NewReport, NewUser, Report, User};
use crate::infrastructure::database::entities::{report, user};
use crate::locale;

// ── Conversion helpers ──────────────────────────────────────────

fn user_to_domain(m: user::Model) -> User {
    User {
        id: m.id,
        email: m.email,
        name: m.name,
        last_name: m.last_name,
        patronymic: m.patronymic,
    }
}

fn report_to_domain(m: report::Model) -> Report {
    Report {
        id: m.id,
        comment: m.comment,
        hours_count: m.hours_count,
        date: m.date,
        user_id: m.user_id,
    }
}

// ── UnitOfWork ──────────────────────────────────────────────────

pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    /// Open a unit of work for one request.
    pub async fn begin(db: &DatabaseConnection) -> DomainResult<Self> {
        let txn = db.begin().await?;
        Ok(Self { txn })
    }

    /// Persist all staged changes.
    pub async fn commit(self) -> DomainResult<()> {
        self.txn.commit().await?;
        Ok(())
    }

    // ── Users ───────────────────────────────────────────────────

    pub async fn find_user(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.txn).await?;
        Ok(model.map(user_to_domain))
    }

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.txn)
            .await?;
        Ok(models.into_iter().map(user_to_domain).collect())
    }

    pub async fn user_exists(&self, id: i32) -> DomainResult<bool> {
        let count = user::Entity::find_by_id(id).count(&self.txn).await?;
        Ok(count > 0)
    }

    /// Whether `email` is already owned by a user other than `exclude_id`.
    /// Comparison is case-sensitive exact match.
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> DomainResult<bool> {
        let mut query = user::Entity::find().filter(user::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(user::Column::Id.ne(id));
        }
        let count = query.count(&self.txn).await?;
        Ok(count > 0)
    }

    pub async fn insert_user(&self, new: NewUser) -> DomainResult<User> {
        let model = user::ActiveModel {
            email: Set(new.email),
            name: Set(new.name),
            last_name: Set(new.last_name),
            patronymic: Set(new.patronymic),
            ..Default::default()
        };
        let saved = model.insert(&self.txn).await?;
        debug!("User inserted: {} ({})", saved.email, saved.id);
        Ok(user_to_domain(saved))
    }

    /// Stage a full-row update. If the row no longer exists by the time
    /// the statement runs, the conflict is reported as NotFound; any
    /// other failure on an existing row propagates untouched.
    pub async fn update_user(&self, u: &User) -> DomainResult<()> {
        let model = user::ActiveModel {
            id: Set(u.id),
            email: Set(u.email.clone()),
            name: Set(u.name.clone()),
            last_name: Set(u.last_name.clone()),
            patronymic: Set(u.patronymic.clone()),
        };
        match model.update(&self.txn).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => {
                if self.user_exists(u.id).await? {
                    Err(DomainError::Database(DbErr::RecordNotUpdated))
                } else {
                    Err(DomainError::NotFound(locale::user_not_found(u.id)))
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a user and, within the same commit, every report it owns.
    pub async fn remove_user(&self, id: i32) -> DomainResult<()> {
        report::Entity::delete_many()
            .filter(report::Column::UserId.eq(id))
            .exec(&self.txn)
            .await?;
        let result = user::Entity::delete_by_id(id).exec(&self.txn).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(locale::user_not_found(id)));
        }
        debug!("User removed: {}", id);
        Ok(())
    }

    /// Remove every user and, transitively, every report.
    pub async fn remove_all_users(&self) -> DomainResult<()> {
        report::Entity::delete_many().exec(&self.txn).await?;
        user::Entity::delete_many().exec(&self.txn).await?;
        Ok(())
    }

    // ── Reports ─────────────────────────────────────────────────

    pub async fn find_report(&self, user_id: i32, id: i32) -> DomainResult<Option<Report>> {
        let model = report::Entity::find()
            .filter(report::Column::UserId.eq(user_id))
            .filter(report::Column::Id.eq(id))
            .one(&self.txn)
            .await?;
        Ok(model.map(report_to_domain))
    }

    /// List a user's reports in insertion order. With `month` set, only
    /// reports whose date falls within that calendar year and month are
    /// returned; the day component of the filter value is ignored.
    pub async fn list_reports(
        &self,
        user_id: i32,
        month: Option<NaiveDate>,
    ) -> DomainResult<Vec<Report>> {
        let mut query = report::Entity::find().filter(report::Column::UserId.eq(user_id));

        if let Some(m) = month {
            let Some(from) = m.with_day(1) else {
                return Ok(Vec::new());
            };
            let Some(to) = from.checked_add_months(Months::new(1)) else {
                return Ok(Vec::new());
            };
            query = query
                .filter(report::Column::Date.gte(from))
                .filter(report::Column::Date.lt(to));
        }

        let models = query
            .order_by_asc(report::Column::Id)
            .all(&self.txn)
            .await?;
        Ok(models.into_iter().map(report_to_domain).collect())
    }

    pub async fn report_exists(&self, id: i32, user_id: i32) -> DomainResult<bool> {
        let count = report::Entity::find()
            .filter(report::Column::Id.eq(id))
            .filter(report::Column::UserId.eq(user_id))
            .count(&self.txn)
            .await?;
        Ok(count > 0)
    }

    /// Attach a new report to an existing user.
    pub async fn insert_report(&self, user_id: i32, new: NewReport) -> DomainResult<Report> {
        let model = report::ActiveModel {
            comment: Set(new.comment),
            hours_count: Set(new.hours_count),
            date: Set(new.date),
            user_id: Set(user_id),
            ..Default::default()
        };
        let saved = model.insert(&self.txn).await?;
        debug!("Report inserted: {} for user {}", saved.id, user_id);
        Ok(report_to_domain(saved))
    }

    /// Stage a full-row update of a report. Vanished rows surface as
    /// NotFound, same policy as [`UnitOfWork::update_user`].
    pub async fn update_report(&self, r: &Report) -> DomainResult<()> {
        let model = report::ActiveModel {
            id: Set(r.id),
            comment: Set(r.comment.clone()),
            hours_count: Set(r.hours_count),
            date: Set(r.date),
            user_id: Set(r.user_id),
        };
        match model.update(&self.txn).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => {
                if self.report_exists(r.id, r.user_id).await? {
                    Err(DomainError::Database(DbErr::RecordNotUpdated))
                } else {
                    Err(DomainError::NotFound(locale::report_not_found(
                        r.user_id, r.id,
                    )))
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn remove_report(&self, user_id: i32, id: i32) -> DomainResult<()> {
        let result = report::Entity::delete_many()
            .filter(report::Column::Id.eq(id))
            .filter(report::Column::UserId.eq(user_id))
            .exec(&self.txn)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(locale::report_not_found(user_id, id)));
        }
        Ok(())
    }

    /// Remove every report owned by `user_id`; the user itself stays.
    pub async fn remove_user_reports(&self, user_id: i32) -> DomainResult<()> {
        report::Entity::delete_many()
            .filter(report::Column::UserId.eq(user_id))
            .exec(&self.txn)
            .await?;
        Ok(())
    }
}
