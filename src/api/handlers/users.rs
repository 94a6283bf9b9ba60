//! User REST API handlers
//!
//! Error precedence for writes: path/body id mismatch, then first
//! validation failure, then email uniqueness, then the mutation itself.
//! A row that vanishes between staging and commit surfaces as 404.

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};

use crate::api::dto::{ErrorDto, UserDto};
use crate::api::error::ApiError;
use crate::api::handlers::AppState;
use crate::infrastructure::UnitOfWork;
use crate::locale;
use crate::validation::validate_user;

/// Список всех пользователей
///
/// Отчёты в ответ не включаются — используйте
/// `GET /api/users/{userId}/reports`.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Список пользователей", body = Vec<UserDto>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    let users = uow.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Получение пользователя по идентификатору
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i32, Path, description = "Идентификатор пользователя")
    ),
    responses(
        (status = 200, description = "Пользователь", body = UserDto),
        (status = 404, description = "Пользователь не найден", body = ErrorDto)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDto>, ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    let user = uow
        .find_user(id)
        .await?
        .ok_or_else(|| ApiError::not_found(locale::user_not_found(id)))?;
    Ok(Json(UserDto::from(user)))
}

/// Создание пользователя
///
/// Идентификатор назначается системой и возвращается в теле ответа
/// вместе с заголовком `Location`.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserDto,
    responses(
        (status = 201, description = "Пользователь создан", body = UserDto),
        (status = 400, description = "Некорректные данные", body = ErrorDto),
        (status = 409, description = "Email уже занят", body = ErrorDto)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<UserDto>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<UserDto>), ApiError> {
    if let Some(message) = validate_user(&body).into_iter().next() {
        return Err(ApiError::validation(message));
    }

    let uow = UnitOfWork::begin(&state.db).await?;

    let email = body.email.clone().unwrap_or_default();
    if uow.email_taken(&email, None).await? {
        return Err(ApiError::conflict(locale::email_taken(&email)));
    }

    let created = uow.insert_user(body.to_new_user()).await?;
    uow.commit().await?;

    let location = format!("/api/users/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserDto::from(created)),
    ))
}

/// Обновление пользователя
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i32, Path, description = "Идентификатор пользователя")
    ),
    request_body = UserDto,
    responses(
        (status = 204, description = "Пользователь обновлён"),
        (status = 400, description = "Некорректные данные или несовпадение идентификаторов", body = ErrorDto),
        (status = 404, description = "Пользователь не найден", body = ErrorDto),
        (status = 409, description = "Email уже занят другим пользователем", body = ErrorDto)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UserDto>,
) -> Result<StatusCode, ApiError> {
    if id != body.id {
        return Err(ApiError::validation(locale::user_id_mismatch()));
    }

    if let Some(message) = validate_user(&body).into_iter().next() {
        return Err(ApiError::validation(message));
    }

    let uow = UnitOfWork::begin(&state.db).await?;

    let email = body.email.clone().unwrap_or_default();
    if uow.email_taken(&email, Some(id)).await? {
        return Err(ApiError::conflict(locale::email_taken(&email)));
    }

    uow.update_user(&body.to_domain(id)).await?;
    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Массовое обновление пользователей
///
/// Обновления применяются в порядке следования в теле запроса и
/// фиксируются одной транзакцией: первая же ошибка отменяет весь пакет.
#[utoipa::path(
    put,
    path = "/api/users",
    tag = "Users",
    request_body = Vec<UserDto>,
    responses(
        (status = 204, description = "Все пользователи обновлены"),
        (status = 400, description = "Некорректные данные", body = ErrorDto),
        (status = 404, description = "Один из пользователей не найден", body = ErrorDto),
        (status = 409, description = "Email уже занят другим пользователем", body = ErrorDto)
    )
)]
pub async fn update_users(
    State(state): State<AppState>,
    Json(body): Json<Vec<UserDto>>,
) -> Result<StatusCode, ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;

    for user in &body {
        if let Some(message) = validate_user(user).into_iter().next() {
            return Err(ApiError::validation(message));
        }

        if !uow.user_exists(user.id).await? {
            return Err(ApiError::not_found(locale::user_update_target_missing(
                user.id,
            )));
        }

        let email = user.email.clone().unwrap_or_default();
        if uow.email_taken(&email, Some(user.id)).await? {
            return Err(ApiError::conflict(locale::email_taken(&email)));
        }

        uow.update_user(&user.to_domain(user.id)).await?;
    }

    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Удаление пользователя
///
/// Вместе с пользователем удаляются все его отчёты.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i32, Path, description = "Идентификатор пользователя")
    ),
    responses(
        (status = 204, description = "Пользователь удалён"),
        (status = 404, description = "Пользователь не найден", body = ErrorDto)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;

    if uow.find_user(id).await?.is_none() {
        return Err(ApiError::not_found(locale::user_not_found(id)));
    }

    uow.remove_user(id).await?;
    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Удаление всех пользователей
///
/// Вместе с пользователями удаляются все отчёты.
#[utoipa::path(
    delete,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 204, description = "Все пользователи удалены")
    )
)]
pub async fn delete_users(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    uow.remove_all_users().await?;
    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
