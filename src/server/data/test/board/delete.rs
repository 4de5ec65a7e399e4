use super::*;

/// Tests deleting an existing board.
///
/// Expected: Ok(1) and the board is gone while the owner remains
#[tokio::test]
async fn deletes_board() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, boards) = factory::helpers::create_user_with_boards(db, 2).await?;

    let repo = BoardRepository::new(db);
    let rows = repo.delete(boards[0].board_number).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id(boards[0].board_number).await?.is_none());
    assert_eq!(repo.count_by_user_id(&user.user_id).await?, 1);

    Ok(())
}

/// Tests deleting a board number that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn succeeds_for_unknown_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);

    assert_eq!(repo.delete(7).await?, 0);

    Ok(())
}
