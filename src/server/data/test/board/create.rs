use super::*;

/// Tests inserting a board for an existing owner.
///
/// Verifies that the database assigns the board number and that the returned
/// board carries its author summary.
///
/// Expected: Ok with a positive board number and author populated
#[tokio::test]
async fn creates_board_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .user_id("u1")
        .name("Ann")
        .nickname(Some("ann"))
        .build()
        .await?;

    let repo = BoardRepository::new(db);
    let board = repo
        .create(CreateBoardParam {
            board_category: 2,
            board_title: "T".to_string(),
            board_write: "W".to_string(),
            user_id: user.user_id.clone(),
            stamp: AuditStamp::by("u1"),
        })
        .await?;

    assert!(board.board_number > 0);
    assert_eq!(board.board_category, 2);
    assert_eq!(board.board_title, "T");
    assert_eq!(board.board_write, "W");
    assert_eq!(board.user_id, "u1");
    assert_eq!(board.created_by, "u1");
    assert_eq!(board.updated_by, "u1");

    let author = board.author.unwrap();
    assert_eq!(author.user_id, "u1");
    assert_eq!(author.user_name, "Ann");
    assert_eq!(author.user_nickname.as_deref(), Some("ann"));

    Ok(())
}

/// Tests that board numbers increase with each insert.
///
/// Expected: second board number greater than the first
#[tokio::test]
async fn assigns_increasing_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::board::create_board(db, &user.user_id).await?;
    let second = factory::board::create_board(db, &user.user_id).await?;

    assert!(second.board_number > first.board_number);

    Ok(())
}

/// Tests inserting a board whose owner does not exist.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let result = repo
        .create(CreateBoardParam {
            board_category: 1,
            board_title: "T".to_string(),
            board_write: "W".to_string(),
            user_id: "ghost".to_string(),
            stamp: AuditStamp::system(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
