//! Wire-format DTOs shared by every HTTP endpoint.
//!
//! Field names follow the camelCase contract of the browser client.

pub mod api;
pub mod board;
pub mod user;
