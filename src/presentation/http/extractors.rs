// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    presentation::http::{links::RequestUrl, state::HttpState},
};
use axum::{
    Extension,
    extract::{FromRequestParts, Query},
    http::{header::HOST, request::Parts},
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

impl<S> FromRequestParts<S> for RequestUrl
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let authority = parts
            .headers
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .or_else(|| parts.uri.authority().map(|a| a.to_string()))
            .unwrap_or_else(|| app_state.links.fallback_host.clone());

        let query = match parts.uri.query() {
            Some(raw) => serde_urlencoded::from_str::<Vec<(String, String)>>(raw)
                .map_err(|_| HttpError::bad_request("malformed query string"))?,
            None => Vec::new(),
        };

        Ok(RequestUrl::new(
            app_state.links.secure,
            authority,
            parts.uri.path(),
            query,
        ))
    }
}

/// Query string extractor whose rejections use the JSON error body.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}
