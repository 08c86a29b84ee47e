use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserItem {
    pub username: String,
    pub email: String,
    /// `username<email>`
    pub username_with_email: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        let username = user.username.to_string();
        let email = user.email.to_string();
        Self {
            username_with_email: format!("{username}<{email}>"),
            username,
            email,
        }
    }
}
