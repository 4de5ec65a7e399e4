//! HTTP request handlers.
//!
//! Controllers extract path, body and session input, convert DTOs to parameter
//! models, call the matching service and convert the result back to DTOs.

pub mod auth;
pub mod board;
pub mod user;

#[cfg(test)]
mod test;
