// tests/e2e_error_statuses.rs
use axum::http::StatusCode;

mod support;

#[tokio::test]
async fn invalid_cursor_returns_400() {
    let app = support::make_test_router(2);
    let json = support::assert_error_response(
        &app,
        "/api/v1/users/?cursor=not-a-valid-cursor",
        StatusCode::BAD_REQUEST,
        "Bad Request",
    )
    .await;
    assert_eq!(json["message"], "Invalid cursor");
}

#[tokio::test]
async fn non_numeric_offset_returns_400() {
    // base64 of "o=abc"
    let app = support::make_test_router(2);
    support::assert_error_response(
        &app,
        "/api/v1/users/?cursor=bz1hYmM%3D",
        StatusCode::BAD_REQUEST,
        "Bad Request",
    )
    .await;
}

#[tokio::test]
async fn position_of_the_wrong_type_returns_400() {
    // base64 of "p=abc" while ordering by the integer id
    let app = support::make_test_router(2);
    support::assert_error_response(
        &app,
        "/api/v1/users/?cursor=cD1hYmM%3D",
        StatusCode::BAD_REQUEST,
        "Bad Request",
    )
    .await;
}

#[tokio::test]
async fn unsupported_ordering_returns_501() {
    let app = support::make_test_router(2);
    support::assert_error_response(
        &app,
        "/api/v1/users/?ordering=score",
        StatusCode::NOT_IMPLEMENTED,
        "Not Implemented",
    )
    .await;
}

#[tokio::test]
async fn malformed_ordering_returns_400() {
    let app = support::make_test_router(2);
    support::assert_error_response(
        &app,
        "/api/v1/users/?ordering=id,,username",
        StatusCode::BAD_REQUEST,
        "Bad Request",
    )
    .await;
}

#[tokio::test]
async fn malformed_position_returns_400_even_when_the_filter_matches_nobody() {
    // base64 of "p=abc"; no username starts with "zzz"
    let app = support::make_test_router(2);
    let json = support::assert_error_response(
        &app,
        "/api/v1/users/?username=zzz&cursor=cD1hYmM%3D",
        StatusCode::BAD_REQUEST,
        "Bad Request",
    )
    .await;
    assert_eq!(json["message"], "Invalid cursor");
}

#[tokio::test]
async fn repeated_query_parameter_returns_json_400() {
    let app = support::make_test_router(2);
    support::assert_error_response(
        &app,
        "/api/v1/users/?cursor=a&cursor=b",
        StatusCode::BAD_REQUEST,
        "Bad Request",
    )
    .await;
}
