use super::*;

/// Tests listing the boards of one owner.
///
/// Verifies that boards of other users are excluded.
///
/// Expected: only the owner's boards
#[tokio::test]
async fn returns_boards_of_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, owned) = factory::helpers::create_user_with_boards(db, 3).await?;
    factory::helpers::create_user_with_boards(db, 2).await?;

    let repo = BoardRepository::new(db);
    let boards = repo.find_by_user_id(&owner.user_id).await?;

    let numbers: Vec<_> = boards.iter().map(|b| b.board_number).collect();
    let expected: Vec<_> = owned.iter().map(|b| b.board_number).collect();
    assert_eq!(numbers, expected);

    Ok(())
}

/// Tests listing boards for an id with no posts.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_user_without_boards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);

    assert!(repo.find_by_user_id("nobody").await?.is_empty());

    Ok(())
}

/// Tests counting the boards of one owner.
///
/// Expected: the owner's count, zero for an unknown id
#[tokio::test]
async fn counts_boards_of_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::helpers::create_user_with_boards(db, 3).await?;
    factory::helpers::create_user_with_boards(db, 1).await?;

    let repo = BoardRepository::new(db);

    assert_eq!(repo.count_by_user_id(&owner.user_id).await?, 3);
    assert_eq!(repo.count_by_user_id("nobody").await?, 0);

    Ok(())
}
