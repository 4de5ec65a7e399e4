use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(1) and the user is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_id("u1")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let rows = repo.delete("u1").await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id("u1").await?.is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Verifies that deletion performs no existence check.
///
/// Expected: Ok(0)
#[tokio::test]
async fn succeeds_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let rows = repo.delete("missing").await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests deleting a user that still owns boards.
///
/// Verifies that boards are not cascaded away; the delete is refused and the
/// boards stay in place.
///
/// Expected: Err and the boards remain
#[tokio::test]
async fn keeps_boards_of_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::helpers::create_user_with_boards(db, 2).await?;

    let repo = UserRepository::new(db);
    let result = repo.delete(&user.user_id).await;

    assert!(result.is_err());

    let boards = crate::server::data::board::BoardRepository::new(db)
        .find_by_user_id(&user.user_id)
        .await?;
    assert_eq!(boards.len(), 2);

    Ok(())
}
