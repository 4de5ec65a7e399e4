//! Noticeboard Test Utils
//!
//! Provides shared testing utilities for the noticeboard backend. This crate offers a
//! builder for creating test contexts with in-memory SQLite databases, a session backed
//! by the same database, and factories for users and boards.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting `user_tb` and `board_tb` rows with defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_board_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_board_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
