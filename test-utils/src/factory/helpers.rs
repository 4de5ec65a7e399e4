//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique ids and nicknames in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user owning `count` boards in the general category.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of boards to create
///
/// # Returns
/// - `Ok((user, boards))` - The owner and its boards in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_boards(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::user::Model, Vec<entity::board::Model>), DbErr> {
    let user = crate::factory::user::create_user(db).await?;

    let mut boards = Vec::with_capacity(count);
    for _ in 0..count {
        boards.push(crate::factory::board::create_board(db, &user.user_id).await?);
    }

    Ok((user, boards))
}
