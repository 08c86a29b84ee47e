// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::users::UserQueryService,
    domain::{pagination::OrderingSpec, user::UserReadRepository},
};

pub struct ApplicationServices {
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserReadRepository>,
        page_size: u64,
        default_ordering: OrderingSpec,
    ) -> Self {
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            page_size,
            default_ordering,
        ));

        Self { user_queries }
    }
}
