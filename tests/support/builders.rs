// tests/support/builders.rs
use chrono::{TimeZone, Utc};

use fango::domain::user::{Email, User, UserId, Username};

pub struct UserBuilder {
    id: i64,
    username: String,
    email: Option<String>,
    joined_day: u32,
}

impl UserBuilder {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: None,
            joined_day: 1,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Day of January 2024 the user joined.
    pub fn joined_day(mut self, day: u32) -> Self {
        self.joined_day = day;
        self
    }

    pub fn build(self) -> User {
        let email = self
            .email
            .unwrap_or_else(|| format!("{}@example.com", self.username));
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username).unwrap(),
            email: Email::new(email).unwrap(),
            date_joined: Utc
                .with_ymd_and_hms(2024, 1, self.joined_day, 9, 0, 0)
                .unwrap(),
        }
    }
}

/// Five users; three of them joined on the same day.
pub fn fixture_users() -> Vec<User> {
    vec![
        UserBuilder::new(1, "alice").joined_day(1).build(),
        UserBuilder::new(2, "adam").joined_day(2).build(),
        UserBuilder::new(3, "bob").joined_day(2).build(),
        UserBuilder::new(4, "carol").joined_day(2).build(),
        UserBuilder::new(5, "dave").joined_day(3).build(),
    ]
}
