//! Audit stamping for persisted rows.
//!
//! Every write to `user_tb` or `board_tb` carries an `AuditStamp` built by the
//! service layer immediately before the repository call. Repositories copy the
//! stamp into the created/updated columns; they never invent one themselves.

use chrono::{DateTime, Utc};

/// Actor recorded for rows written without an authenticated user.
pub const SYSTEM_ACTOR: &str = "System";

/// Actor and instant of a single write.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditStamp {
    /// User id (or [`SYSTEM_ACTOR`]) responsible for the write.
    pub actor: String,
    /// Time of the write.
    pub at: DateTime<Utc>,
}

impl AuditStamp {
    /// Stamps a write performed by `actor` at the current instant.
    pub fn by(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            at: Utc::now(),
        }
    }

    /// Stamps a write performed by the system actor.
    pub fn system() -> Self {
        Self::by(SYSTEM_ACTOR)
    }
}
