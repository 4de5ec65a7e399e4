//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They validate input, stamp audit fields before each persist, and turn
//! missing rows into `AppError::NotFound`. They work with domain models rather
//! than DTOs or entity models.

pub mod auth;
pub mod board;
pub mod user;
