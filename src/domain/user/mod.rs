// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{User, UserFilter, ORDERABLE_FIELDS};
pub use repository::{FilteredUsers, UserReadRepository};
pub use value_objects::{Email, UserId, Username};
