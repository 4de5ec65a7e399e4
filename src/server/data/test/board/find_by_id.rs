use super::*;

/// Tests finding an existing board by number.
///
/// Expected: Ok(Some(Board)) with the author joined
#[tokio::test]
async fn finds_existing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let created = factory::board::BoardFactory::new(db, &user.user_id)
        .title("Hello")
        .build()
        .await?;

    let repo = BoardRepository::new(db);
    let board = repo.find_by_id(created.board_number).await?;

    assert!(board.is_some());
    let board = board.unwrap();
    assert_eq!(board.board_title, "Hello");
    assert_eq!(board.author.map(|a| a.user_id), Some(user.user_id));

    Ok(())
}

/// Tests finding a board number that was never assigned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}
