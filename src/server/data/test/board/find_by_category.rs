use super::*;

/// Tests filtering boards by category code.
///
/// Expected: only boards with the requested code, ordered by board number
#[tokio::test]
async fn returns_only_matching_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let free_a = factory::board::BoardFactory::new(db, &user.user_id)
        .category(2)
        .build()
        .await?;
    factory::board::BoardFactory::new(db, &user.user_id)
        .category(1)
        .build()
        .await?;
    let free_b = factory::board::BoardFactory::new(db, &user.user_id)
        .category(2)
        .build()
        .await?;

    let repo = BoardRepository::new(db);
    let boards = repo.find_by_category(2).await?;

    let numbers: Vec<_> = boards.iter().map(|b| b.board_number).collect();
    assert_eq!(numbers, vec![free_a.board_number, free_b.board_number]);
    assert!(boards.iter().all(|b| b.board_category == 2));

    Ok(())
}

/// Tests filtering by a category nobody posted in.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unused_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_user_with_boards(db, 2).await?;

    let repo = BoardRepository::new(db);

    assert!(repo.find_by_category(4).await?.is_empty());

    Ok(())
}

/// Tests listing every board regardless of category.
///
/// Expected: all boards ordered by board number, each with its author
#[tokio::test]
async fn find_all_returns_every_board() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::board::BoardFactory::new(db, &user.user_id)
        .category(3)
        .build()
        .await?;
    let second = factory::board::BoardFactory::new(db, &user.user_id)
        .category(4)
        .build()
        .await?;

    let repo = BoardRepository::new(db);
    let boards = repo.find_all().await?;

    let numbers: Vec<_> = boards.iter().map(|b| b.board_number).collect();
    assert_eq!(numbers, vec![first.board_number, second.board_number]);
    assert!(boards.iter().all(|b| b.author.is_some()));

    Ok(())
}
