use std::sync::Arc;

use crate::domain::{pagination::OrderingSpec, user::UserReadRepository};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserReadRepository>,
    pub(super) page_size: u64,
    pub(super) default_ordering: OrderingSpec,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserReadRepository>,
        page_size: u64,
        default_ordering: OrderingSpec,
    ) -> Self {
        Self {
            user_repo,
            page_size,
            default_ordering,
        }
    }
}
