//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter types carry
//! exactly what each service or repository operation needs.

pub mod audit;
pub mod board;
pub mod user;
