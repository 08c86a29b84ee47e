// src/infrastructure/repositories/postgres_user.rs
use super::{map_sqlx, slice::push_slice};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{FieldDef, SliceRequest};
use crate::domain::user::{
    Email, ORDERABLE_FIELDS, User, UserFilter, UserId, UserReadRepository, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_slice_query<'a>(
        filter: &UserFilter,
        request: &SliceRequest,
    ) -> DomainResult<QueryBuilder<'a, Postgres>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, username, email, date_joined FROM users");

        let has_where = match filter.prefix() {
            Some(prefix) => {
                builder.push(" WHERE username ILIKE ");
                builder.push_bind(format!("{}%", escape_like(prefix)));
                true
            }
            None => false,
        };

        push_slice(&mut builder, ORDERABLE_FIELDS, request, has_where)?;
        Ok(builder)
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    date_joined: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: Email::new(row.email)?,
            date_joined: row.date_joined,
        })
    }
}

#[async_trait]
impl UserReadRepository for PostgresUserRepository {
    fn orderable_fields(&self) -> &[FieldDef] {
        ORDERABLE_FIELDS
    }

    async fn fetch_slice(
        &self,
        filter: &UserFilter,
        request: &SliceRequest,
    ) -> DomainResult<Vec<User>> {
        let mut builder = Self::build_slice_query(filter, request)?;
        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
