// src/presentation/http/openapi.rs
use crate::application::dto::UserItem;
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Documented shape of a users page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserPageResponse {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<UserItem>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            UserPageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::UserItem
        )
    ),
    tags(
        (name = "Users", description = "Cursor paginated user listing"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "fango",
        description = "Cursor pagination service",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_the_users_listing() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/api/v1/users/"]["get"].is_object());
        assert!(doc["components"]["schemas"]["UserPageResponse"].is_object());
    }
}
