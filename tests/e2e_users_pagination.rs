// tests/e2e_users_pagination.rs
use axum::http::StatusCode;

mod support;

const USERS: &str = "/api/v1/users/";

#[tokio::test]
async fn first_page_links_forward_only() {
    let app = support::make_test_router(2);
    let (status, page) = support::get_json(&app, USERS).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(support::usernames(&page), ["alice", "adam"]);
    assert!(page["previous"].is_null());
    let next = support::link(&page, "next").expect("next link");
    assert!(
        next.starts_with("https://api.test/api/v1/users/?cursor="),
        "unexpected link {next}"
    );
    assert_eq!(
        page["results"][0]["username_with_email"],
        "alice<alice@example.com>"
    );
}

#[tokio::test]
async fn following_next_lists_every_user_once() {
    let app = support::make_test_router(2);
    let pages = support::walk_next(&app, USERS).await;
    assert_eq!(
        pages,
        vec![
            vec!["alice", "adam"],
            vec!["bob", "carol"],
            vec!["dave"],
        ]
    );
}

#[tokio::test]
async fn previous_link_returns_to_the_earlier_page() {
    let app = support::make_test_router(2);
    let (_, first) = support::get_json(&app, USERS).await;
    let next = support::link(&first, "next").unwrap();

    let (_, second) = support::get_json(&app, &support::path_of(&next)).await;
    assert_eq!(support::usernames(&second), ["bob", "carol"]);
    let previous = support::link(&second, "previous").expect("previous link");

    let (status, back) = support::get_json(&app, &support::path_of(&previous)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(support::usernames(&back), ["alice", "adam"]);
    assert!(back["previous"].is_null());
    assert!(back["next"].is_string());
}

#[tokio::test]
async fn duplicate_join_dates_are_not_repeated_or_skipped() {
    let app = support::make_test_router(2);
    let pages = support::walk_next(&app, "/api/v1/users/?ordering=-date_joined,id").await;
    let flat: Vec<String> = pages.into_iter().flatten().collect();
    assert_eq!(flat, ["dave", "adam", "bob", "carol", "alice"]);
}

#[tokio::test]
async fn username_filter_is_kept_in_links() {
    let app = support::make_test_router(1);
    let (status, page) = support::get_json(&app, "/api/v1/users/?username=A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(support::usernames(&page), ["alice"]);

    let next = support::link(&page, "next").expect("next link");
    assert!(next.contains("username=A"), "filter dropped from {next}");
    let (_, second) = support::get_json(&app, &support::path_of(&next)).await;
    assert_eq!(support::usernames(&second), ["adam"]);
    assert!(second["next"].is_null());
}

#[tokio::test]
async fn debug_mode_keeps_plain_http_links() {
    let app = support::make_router(support::fixture_users(), 2, false);
    let (_, page) = support::get_json(&app, USERS).await;
    let next = support::link(&page, "next").unwrap();
    assert!(next.starts_with("http://api.test/"), "unexpected link {next}");
}

#[tokio::test]
async fn empty_listing_has_no_links() {
    let app = support::make_router(Vec::new(), 2, true);
    let (status, page) = support::get_json(&app, USERS).await;
    assert_eq!(status, StatusCode::OK);
    assert!(support::usernames(&page).is_empty());
    assert!(page["next"].is_null());
    assert!(page["previous"].is_null());
}
