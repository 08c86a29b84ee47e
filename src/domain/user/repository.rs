// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{FieldDef, PageSource, SliceRequest};
use crate::domain::user::entity::{User, UserFilter};
use async_trait::async_trait;

#[async_trait]
pub trait UserReadRepository: Send + Sync {
    fn orderable_fields(&self) -> &[FieldDef];

    async fn fetch_slice(
        &self,
        filter: &UserFilter,
        request: &SliceRequest,
    ) -> DomainResult<Vec<User>>;
}

/// Users matching a filter, viewed as a paginatable collection.
pub struct FilteredUsers<'a> {
    repo: &'a dyn UserReadRepository,
    filter: &'a UserFilter,
}

impl<'a> FilteredUsers<'a> {
    pub fn new(repo: &'a dyn UserReadRepository, filter: &'a UserFilter) -> Self {
        Self { repo, filter }
    }
}

#[async_trait]
impl<'a> PageSource for FilteredUsers<'a> {
    type Item = User;

    fn orderable_fields(&self) -> &[FieldDef] {
        self.repo.orderable_fields()
    }

    async fn fetch(&self, request: &SliceRequest) -> DomainResult<Vec<User>> {
        self.repo.fetch_slice(self.filter, request).await
    }
}
