//! API Router with Swagger UI

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::{ErrorDto, ReportDto, UserDto};
use crate::api::handlers::{reports, users, AppState};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::update_users,
        users::delete_user,
        users::delete_users,
        // Reports
        reports::list_reports,
        reports::get_report,
        reports::create_report,
        reports::update_report,
        reports::update_reports,
        reports::delete_report,
        reports::delete_reports,
    ),
    components(
        schemas(UserDto, ReportDto, ErrorDto)
    ),
    tags(
        (name = "Users", description = "CRUD-операции для пользователей. Email уникален среди всех пользователей; удаление пользователя каскадно удаляет его отчёты."),
        (name = "Reports", description = "Отчёты об отработанных часах, вложенные под пользователя. Отчёт принадлежит ровно одному пользователю и не переносится. Список фильтруется по месяцу через `?month=`."),
    ),
    info(
        title = "Report API",
        version = "1.0.0",
        description = "REST API для учёта отработанных часов: пользователи и их отчёты.

## Формат ошибок

Все ожидаемые ошибки (400/404/409) возвращают тело `{\"message\": \"...\"}`
с человекочитаемым описанием на русском языке.

## Порядок проверок

Сначала проверяется существование родительского ресурса, затем тело
запроса (первая нарушенная проверка), затем уникальность/принадлежность,
и только потом выполняется изменение."
    )
)]
pub struct ApiDoc;

/// Create the REST API router.
///
/// Every parametric route lives in a single nested router so matchit
/// sees one tree with consistent parameter names.
pub fn create_api_router(db: DatabaseConnection) -> Router {
    let state = AppState { db };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let user_routes = Router::new()
        .route(
            "/",
            get(users::list_users)
                .post(users::create_user)
                .put(users::update_users)
                .delete(users::delete_users),
        )
        .route(
            "/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/{user_id}/reports",
            get(reports::list_reports)
                .post(reports::create_report)
                .put(reports::update_reports)
                .delete(reports::delete_reports),
        )
        .route(
            "/{user_id}/reports/{report_id}",
            get(reports::get_report)
                .put(reports::update_report)
                .delete(reports::delete_report),
        )
        .with_state(state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .nest("/api/users", user_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
