//! Request-scoped session access.
//!
//! - `session` - Typed wrapper over the raw tower-sessions `Session`
//! - `context` - Extractor handing each handler its session and optional user

pub mod context;
pub mod session;

#[cfg(test)]
mod test;
