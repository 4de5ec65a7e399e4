use thiserror::Error;

/// Errors raised while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating tables failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Creating the session table failed.
    #[error(transparent)]
    SessionStore(#[from] sea_orm::SqlxError),
}
