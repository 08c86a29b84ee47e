// src/presentation/http/controllers/users.rs
use crate::application::{
    dto::{Page, UserItem},
    queries::users::ListUsersQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiQuery;
use crate::presentation::http::links::RequestUrl;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Opaque page cursor taken from a `next` or `previous` link.
    #[serde(default)]
    pub cursor: Option<String>,
    /// Case-insensitive username prefix.
    #[serde(default)]
    pub username: Option<String>,
    /// Comma separated fields, `-` prefix for descending (default `id`).
    #[serde(default)]
    pub ordering: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/users/",
    params(ListUsersParams),
    responses(
        (status = 200, description = "One page of users.", body = crate::presentation::http::openapi::UserPageResponse),
        (status = 400, description = "Invalid cursor or ordering.", body = crate::presentation::http::error::ErrorResponse),
        (status = 501, description = "Ordering field not supported.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    url: RequestUrl,
    ApiQuery(params): ApiQuery<ListUsersParams>,
) -> HttpResult<Json<Page<UserItem>>> {
    let query = ListUsersQuery {
        cursor: params.cursor,
        username: params.username,
        ordering: params.ordering,
    };

    state
        .services
        .user_queries
        .list_users(query, &url)
        .await
        .into_http()
        .map(Json)
}
