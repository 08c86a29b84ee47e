use crate::domain::errors::DomainResult;
use crate::domain::pagination::{FieldDef, SliceRequest};
use crate::domain::user::{ORDERABLE_FIELDS, User, UserFilter, UserReadRepository};
use crate::infrastructure::memory::slice_records;
use async_trait::async_trait;

/// Fixed set of users kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserReadRepository for InMemoryUserRepository {
    fn orderable_fields(&self) -> &[FieldDef] {
        ORDERABLE_FIELDS
    }

    async fn fetch_slice(
        &self,
        filter: &UserFilter,
        request: &SliceRequest,
    ) -> DomainResult<Vec<User>> {
        slice_records(
            self.users.iter().filter(|user| filter.matches(user)),
            ORDERABLE_FIELDS,
            request,
        )
    }
}
