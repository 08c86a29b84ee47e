// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// How absolute page links are rendered.
#[derive(Clone, Debug)]
pub struct LinkSettings {
    /// Emit `https` links, as when running behind a TLS-terminating proxy.
    pub secure: bool,
    /// Authority used when a request carries no `Host` header.
    pub fallback_host: String,
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub links: LinkSettings,
}
