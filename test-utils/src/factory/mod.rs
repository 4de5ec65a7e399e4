//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the values
//! they care about. Every row gets audit columns stamped by the system actor.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let board = factory::board::create_board(&db, &user.user_id).await?;
//!
//!     // Create an owner with several boards
//!     let (user, boards) = factory::helpers::create_user_with_boards(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .user_id("u1")
//!     .password("p")
//!     .nickname(Some("ann"))
//!     .build()
//!     .await?;
//!
//! let board = factory::board::BoardFactory::new(&db, &user.user_id)
//!     .category(2)
//!     .title("T")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create `user_tb` rows
//! - `board` - Create `board_tb` rows
//! - `helpers` - Id generation and multi-row helpers

pub mod board;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use board::create_board;
pub use user::create_user;
