//! Database repository layer for users and boards.
//!
//! Repositories use SeaORM entity models internally and return domain models to
//! keep the data layer separate from the business logic layer. All queries,
//! inserts, updates and deletes go through these repositories.

pub mod board;
pub mod user;

#[cfg(test)]
mod test;
