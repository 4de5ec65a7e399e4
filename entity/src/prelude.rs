pub use super::board::Entity as Board;
pub use super::user::Entity as User;
