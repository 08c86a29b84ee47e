pub mod pagination;
pub mod users;

pub use pagination::Page;
pub use users::UserItem;
