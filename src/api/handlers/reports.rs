//! Report REST API handlers
//!
//! Every endpoint resolves the owning user first; a missing user is
//! always 404 before the body is even looked at. After that: validation,
//! then path/body id mismatch, then report ownership.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::dto::{ErrorDto, ReportDto};
use crate::api::error::ApiError;
use crate::api::handlers::AppState;
use crate::infrastructure::UnitOfWork;
use crate::locale;
use crate::validation::validate_report;

/// Параметры списка отчётов
#[derive(Debug, Deserialize, IntoParams)]
pub struct ReportListQuery {
    /// Календарная дата; значимы только год и месяц, день игнорируется
    pub month: Option<NaiveDate>,
}

/// Resolve the owning user or fail with 404.
async fn require_user(uow: &UnitOfWork, user_id: i32) -> Result<(), ApiError> {
    if uow.user_exists(user_id).await? {
        Ok(())
    } else {
        Err(ApiError::not_found(locale::user_not_found(user_id)))
    }
}

/// Список отчётов пользователя
///
/// С параметром `month` возвращаются только отчёты, дата которых
/// попадает в указанный месяц указанного года.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/reports",
    tag = "Reports",
    params(
        ("user_id" = i32, Path, description = "Идентификатор пользователя"),
        ReportListQuery
    ),
    responses(
        (status = 200, description = "Список отчётов", body = Vec<ReportDto>),
        (status = 404, description = "Пользователь не найден", body = ErrorDto)
    )
)]
pub async fn list_reports(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(query): Query<ReportListQuery>,
) -> Result<Json<Vec<ReportDto>>, ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    require_user(&uow, user_id).await?;

    let reports = uow.list_reports(user_id, query.month).await?;
    Ok(Json(reports.into_iter().map(ReportDto::from).collect()))
}

/// Получение отчёта по идентификатору
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/reports/{report_id}",
    tag = "Reports",
    params(
        ("user_id" = i32, Path, description = "Идентификатор пользователя"),
        ("report_id" = i32, Path, description = "Идентификатор отчёта")
    ),
    responses(
        (status = 200, description = "Отчёт", body = ReportDto),
        (status = 404, description = "Пользователь или отчёт не найден", body = ErrorDto)
    )
)]
pub async fn get_report(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(i32, i32)>,
) -> Result<Json<ReportDto>, ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    require_user(&uow, user_id).await?;

    let report = uow
        .find_report(user_id, id)
        .await?
        .ok_or_else(|| ApiError::not_found(locale::report_not_found(user_id, id)))?;
    Ok(Json(ReportDto::from(report)))
}

/// Создание отчёта
///
/// Отчёт привязывается к пользователю из пути; идентификатор
/// назначается системой и возвращается вместе с заголовком `Location`.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/reports",
    tag = "Reports",
    params(
        ("user_id" = i32, Path, description = "Идентификатор пользователя")
    ),
    request_body = ReportDto,
    responses(
        (status = 201, description = "Отчёт создан", body = ReportDto),
        (status = 400, description = "Некорректные данные", body = ErrorDto),
        (status = 404, description = "Пользователь не найден", body = ErrorDto)
    )
)]
pub async fn create_report(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(body): Json<ReportDto>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ReportDto>), ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    require_user(&uow, user_id).await?;

    if let Some(message) = validate_report(&body).into_iter().next() {
        return Err(ApiError::validation(message));
    }

    let created = uow.insert_report(user_id, body.to_new_report()).await?;
    uow.commit().await?;

    let location = format!("/api/users/{}/reports/{}", user_id, created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ReportDto::from(created)),
    ))
}

/// Обновление отчёта
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/reports/{report_id}",
    tag = "Reports",
    params(
        ("user_id" = i32, Path, description = "Идентификатор пользователя"),
        ("report_id" = i32, Path, description = "Идентификатор отчёта")
    ),
    request_body = ReportDto,
    responses(
        (status = 204, description = "Отчёт обновлён"),
        (status = 400, description = "Некорректные данные или несовпадение идентификаторов", body = ErrorDto),
        (status = 404, description = "Пользователь или отчёт не найден", body = ErrorDto)
    )
)]
pub async fn update_report(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(i32, i32)>,
    Json(body): Json<ReportDto>,
) -> Result<StatusCode, ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    require_user(&uow, user_id).await?;

    if let Some(message) = validate_report(&body).into_iter().next() {
        return Err(ApiError::validation(message));
    }

    if id != body.id {
        return Err(ApiError::validation(locale::report_id_mismatch()));
    }

    if !uow.report_exists(id, user_id).await? {
        return Err(ApiError::not_found(locale::report_update_target_missing(
            user_id, id,
        )));
    }

    uow.update_report(&body.to_domain(id, user_id)).await?;
    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Массовое обновление отчётов пользователя
///
/// Обновления фиксируются одной транзакцией: первая же ошибка отменяет
/// весь пакет.
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/reports",
    tag = "Reports",
    params(
        ("user_id" = i32, Path, description = "Идентификатор пользователя")
    ),
    request_body = Vec<ReportDto>,
    responses(
        (status = 204, description = "Все отчёты обновлены"),
        (status = 400, description = "Некорректные данные", body = ErrorDto),
        (status = 404, description = "Пользователь или один из отчётов не найден", body = ErrorDto)
    )
)]
pub async fn update_reports(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(body): Json<Vec<ReportDto>>,
) -> Result<StatusCode, ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    require_user(&uow, user_id).await?;

    for report in &body {
        if let Some(message) = validate_report(report).into_iter().next() {
            return Err(ApiError::validation(message));
        }

        if !uow.report_exists(report.id, user_id).await? {
            return Err(ApiError::not_found(locale::report_update_target_missing(
                user_id, report.id,
            )));
        }

        uow.update_report(&report.to_domain(report.id, user_id))
            .await?;
    }

    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Удаление отчёта
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/reports/{report_id}",
    tag = "Reports",
    params(
        ("user_id" = i32, Path, description = "Идентификатор пользователя"),
        ("report_id" = i32, Path, description = "Идентификатор отчёта")
    ),
    responses(
        (status = 204, description = "Отчёт удалён"),
        (status = 404, description = "Пользователь или отчёт не найден", body = ErrorDto)
    )
)]
pub async fn delete_report(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    require_user(&uow, user_id).await?;

    if uow.find_report(user_id, id).await?.is_none() {
        return Err(ApiError::not_found(locale::report_not_found(user_id, id)));
    }

    uow.remove_report(user_id, id).await?;
    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Удаление всех отчётов пользователя
///
/// Сам пользователь при этом не удаляется.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/reports",
    tag = "Reports",
    params(
        ("user_id" = i32, Path, description = "Идентификатор пользователя")
    ),
    responses(
        (status = 204, description = "Все отчёты пользователя удалены"),
        (status = 404, description = "Пользователь не найден", body = ErrorDto)
    )
)]
pub async fn delete_reports(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    require_user(&uow, user_id).await?;

    uow.remove_user_reports(user_id).await?;
    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
