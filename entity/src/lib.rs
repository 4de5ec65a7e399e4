//! SeaORM entity models for the noticeboard schema.

pub mod prelude;

pub mod board;
pub mod user;
