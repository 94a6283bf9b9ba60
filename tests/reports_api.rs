//! Endpoint tests for `/api/users/{userId}/reports`.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{create_report, create_user, report_body, send, test_app};

#[tokio::test]
async fn create_then_get_returns_equivalent_report() {
    let app = test_app().await;
    let user = create_user(&app, "a@example.com").await;

    let resp = send(
        &app,
        Method::POST,
        &format!("/api/users/{}/reports", user),
        Some(report_body("настройка стенда", 6, "2024-05-14")),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let id = resp.body["id"].as_i64().expect("id");
    assert_eq!(
        resp.headers["location"],
        format!("/api/users/{}/reports/{}", user, id).as_str()
    );

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/reports/{}", user, id),
        None,
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["comment"], "настройка стенда");
    assert_eq!(resp.body["hoursCount"], 6);
    assert_eq!(resp.body["date"], "2024-05-14");
}

#[tokio::test]
async fn post_to_missing_user_is_not_found_before_validation() {
    let app = test_app().await;

    // The body is invalid (empty comment), but the user check runs
    // first and wins.
    let resp = send(
        &app,
        Method::POST,
        "/api/users/9999/reports",
        Some(report_body("", 0, "2024-05-14")),
    )
    .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(
        resp.message(),
        "Пользователь с идентификатором 9999 не найден"
    );
}

#[tokio::test]
async fn hours_count_boundaries() {
    let app = test_app().await;
    let user = create_user(&app, "a@example.com").await;
    let uri = format!("/api/users/{}/reports", user);

    let resp = send(&app, Method::POST, &uri, Some(report_body("x", 0, "2024-05-14"))).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.message(),
        "Параметр 'hoursCount' не может иметь значение меньше 1"
    );

    let resp = send(
        &app,
        Method::POST,
        &uri,
        Some(json!({ "comment": "x", "date": "2024-05-14" })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.message(), "Параметр 'hoursCount' отсутствует в запросе.");

    let resp = send(&app, Method::POST, &uri, Some(report_body("x", 1, "2024-05-14"))).await;
    assert_eq!(resp.status, StatusCode::CREATED);
}

#[tokio::test]
async fn overlong_comment_is_rejected() {
    let app = test_app().await;
    let user = create_user(&app, "a@example.com").await;

    let comment = "к".repeat(5001);
    let resp = send(
        &app,
        Method::POST,
        &format!("/api/users/{}/reports", user),
        Some(report_body(&comment, 1, "2024-05-14")),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.message(),
        "Длина параметра 'comment' не должна превышать 5000 символов."
    );
}

#[tokio::test]
async fn month_filter_restricts_to_calendar_month() {
    let app = test_app().await;
    let user = create_user(&app, "a@example.com").await;

    create_report(&app, user, "май, начало", "2024-05-01").await;
    create_report(&app, user, "май, конец", "2024-05-31").await;
    create_report(&app, user, "июнь", "2024-06-01").await;

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/reports?month=2024-05-01", user),
        None,
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    let reports = resp.body.as_array().expect("array");
    assert_eq!(reports.len(), 2);

    // Only year and month of the filter matter, the day is ignored.
    let resp = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/reports?month=2024-06-15", user),
        None,
    )
    .await;
    assert_eq!(resp.body.as_array().expect("array").len(), 1);

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/reports", user),
        None,
    )
    .await;
    assert_eq!(resp.body.as_array().expect("array").len(), 3);
}

#[tokio::test]
async fn report_of_another_user_is_not_visible() {
    let app = test_app().await;
    let owner = create_user(&app, "owner@example.com").await;
    let other = create_user(&app, "other@example.com").await;
    let report = create_report(&app, owner, "отчёт", "2024-05-01").await;

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/reports/{}", other, report),
        None,
    )
    .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(
        resp.message(),
        format!(
            "У пользователя {} отсутствует отчёт с идентификатором {}",
            other, report
        )
    );
}

#[tokio::test]
async fn put_updates_report() {
    let app = test_app().await;
    let user = create_user(&app, "a@example.com").await;
    let report = create_report(&app, user, "до правки", "2024-05-01").await;

    let resp = send(
        &app,
        Method::PUT,
        &format!("/api/users/{}/reports/{}", user, report),
        Some(json!({
            "id": report,
            "comment": "после правки",
            "hoursCount": 4,
            "date": "2024-05-02"
        })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/reports/{}", user, report),
        None,
    )
    .await;
    assert_eq!(resp.body["comment"], "после правки");
    assert_eq!(resp.body["hoursCount"], 4);
    assert_eq!(resp.body["date"], "2024-05-02");
}

#[tokio::test]
async fn put_with_mismatched_id_is_rejected() {
    let app = test_app().await;
    let user = create_user(&app, "a@example.com").await;
    let report = create_report(&app, user, "отчёт", "2024-05-01").await;

    let mut body = report_body("отчёт", 8, "2024-05-01");
    body["id"] = json!(report + 1);
    let resp = send(
        &app,
        Method::PUT,
        &format!("/api/users/{}/reports/{}", user, report),
        Some(body),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.message(),
        "Идентификатор отчёта в запросе не совпадает с идентификатором в теле запроса."
    );
}

#[tokio::test]
async fn put_missing_report_is_not_found() {
    let app = test_app().await;
    let user = create_user(&app, "a@example.com").await;

    let mut body = report_body("отчёт", 8, "2024-05-01");
    body["id"] = json!(4242);
    let resp = send(
        &app,
        Method::PUT,
        &format!("/api/users/{}/reports/4242", user),
        Some(body),
    )
    .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(
        resp.message(),
        format!(
            "Не удалось выполнить обновление отчётов пользователя с идентификатором {}. \
             У пользователя отсутствует отчёт с идентификатором 4242.",
            user
        )
    );
}

#[tokio::test]
async fn bulk_put_is_all_or_nothing() {
    let app = test_app().await;
    let user = create_user(&app, "a@example.com").await;

    let r1 = create_report(&app, user, "первый", "2024-05-01").await;
    let r2 = create_report(&app, user, "второй", "2024-05-02").await;
    let r3 = create_report(&app, user, "третий", "2024-05-03").await;

    // The second item fails validation; no report may change.
    let resp = send(
        &app,
        Method::PUT,
        &format!("/api/users/{}/reports", user),
        Some(json!([
            { "id": r1, "comment": "изменён", "hoursCount": 1, "date": "2024-05-01" },
            { "id": r2, "comment": "изменён", "hoursCount": 0, "date": "2024-05-02" },
            { "id": r3, "comment": "изменён", "hoursCount": 1, "date": "2024-05-03" }
        ])),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/reports", user),
        None,
    )
    .await;
    let comments: Vec<&str> = resp
        .body
        .as_array()
        .expect("array")
        .iter()
        .map(|r| r["comment"].as_str().expect("comment"))
        .collect();
    assert_eq!(comments, vec!["первый", "второй", "третий"]);
}

#[tokio::test]
async fn bulk_put_updates_every_report() {
    let app = test_app().await;
    let user = create_user(&app, "a@example.com").await;

    let r1 = create_report(&app, user, "первый", "2024-05-01").await;
    let r2 = create_report(&app, user, "второй", "2024-05-02").await;

    let resp = send(
        &app,
        Method::PUT,
        &format!("/api/users/{}/reports", user),
        Some(json!([
            { "id": r1, "comment": "новый первый", "hoursCount": 2, "date": "2024-05-01" },
            { "id": r2, "comment": "новый второй", "hoursCount": 3, "date": "2024-05-02" }
        ])),
    )
    .await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/reports", user),
        None,
    )
    .await;
    let reports = resp.body.as_array().expect("array");
    assert_eq!(reports[0]["comment"], "новый первый");
    assert_eq!(reports[1]["comment"], "новый второй");
}

#[tokio::test]
async fn delete_report_removes_only_that_report() {
    let app = test_app().await;
    let user = create_user(&app, "a@example.com").await;
    let r1 = create_report(&app, user, "первый", "2024-05-01").await;
    let r2 = create_report(&app, user, "второй", "2024-05-02").await;

    let resp = send(
        &app,
        Method::DELETE,
        &format!("/api/users/{}/reports/{}", user, r1),
        None,
    )
    .await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/reports/{}", user, r1),
        None,
    )
    .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/reports/{}", user, r2),
        None,
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn delete_all_reports_keeps_the_user() {
    let app = test_app().await;
    let user = create_user(&app, "a@example.com").await;
    create_report(&app, user, "первый", "2024-05-01").await;
    create_report(&app, user, "второй", "2024-05-02").await;

    let resp = send(
        &app,
        Method::DELETE,
        &format!("/api/users/{}/reports", user),
        None,
    )
    .await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/reports", user),
        None,
    )
    .await;
    assert_eq!(resp.body.as_array().expect("array").len(), 0);

    let resp = send(&app, Method::GET, &format!("/api/users/{}", user), None).await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn delete_for_missing_user_is_not_found() {
    let app = test_app().await;

    let resp = send(&app, Method::DELETE, "/api/users/9999/reports", None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    let resp = send(&app, Method::DELETE, "/api/users/9999/reports/1", None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
