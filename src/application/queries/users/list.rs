use super::UserQueryService;
use crate::{
    application::{
        dto::{Page, UserItem},
        error::ApplicationResult,
        ports::links::PageLinks,
        queries::pagination::{PageQuery, paginate},
    },
    domain::{
        pagination::OrderingSpec,
        user::{FilteredUsers, UserFilter},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery {
    pub cursor: Option<String>,
    pub username: Option<String>,
    pub ordering: Option<String>,
}

impl UserQueryService {
    pub async fn list_users(
        &self,
        query: ListUsersQuery,
        links: &dyn PageLinks,
    ) -> ApplicationResult<Page<UserItem>> {
        let ordering = match query.ordering.as_deref() {
            Some(raw) if !raw.trim().is_empty() => OrderingSpec::parse(raw)?,
            _ => self.default_ordering.clone(),
        };
        let filter = UserFilter {
            username_prefix: query.username,
        };
        let source = FilteredUsers::new(self.user_repo.as_ref(), &filter);

        let page = paginate(
            &source,
            PageQuery {
                cursor: query.cursor.as_deref(),
                ordering,
                page_size: self.page_size,
            },
            links,
        )
        .await?;

        Ok(page.map(UserItem::from))
    }
}
