// src/domain/user/entity.rs
use crate::domain::pagination::{FieldDef, FieldKind, FieldValue, Record};
use crate::domain::user::value_objects::{Email, UserId, Username};
use chrono::{DateTime, Utc};

/// Fields users can be ordered and paginated by.
pub const ORDERABLE_FIELDS: &[FieldDef] = &[
    FieldDef::new("id", FieldKind::Int),
    FieldDef::new("username", FieldKind::Text),
    FieldDef::new("email", FieldKind::Text),
    FieldDef::new("date_joined", FieldKind::Timestamp),
];

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub date_joined: DateTime<Utc>,
}

impl Record for User {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Int(self.id.into())),
            "username" => Some(self.username.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "date_joined" => Some(self.date_joined.into()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub username_prefix: Option<String>,
}

impl UserFilter {
    /// Case-insensitive username prefix match; an absent or blank prefix
    /// matches every user.
    pub fn matches(&self, user: &User) -> bool {
        match self.prefix() {
            Some(prefix) => user
                .username
                .as_str()
                .to_lowercase()
                .starts_with(&prefix.to_lowercase()),
            None => true,
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.username_prefix
            .as_deref()
            .filter(|prefix| !prefix.is_empty())
    }
}
