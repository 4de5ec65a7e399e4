use super::*;

/// Tests updating title, body and category of a board.
///
/// Verifies that owner and created-by are kept while updated-by changes.
///
/// Expected: Ok(Some(Board)) with new content
#[tokio::test]
async fn updates_content_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let created = factory::board::create_board(db, &user.user_id).await?;

    let repo = BoardRepository::new(db);
    let updated = repo
        .update(UpdateBoardParam {
            board_number: created.board_number,
            board_category: Some(3),
            board_title: "New".to_string(),
            board_write: "Body".to_string(),
            stamp: AuditStamp::by("editor"),
        })
        .await?;

    let updated = updated.unwrap();
    assert_eq!(updated.board_number, created.board_number);
    assert_eq!(updated.board_category, 3);
    assert_eq!(updated.board_title, "New");
    assert_eq!(updated.board_write, "Body");
    assert_eq!(updated.user_id, user.user_id);
    assert_eq!(updated.created_by, created.created_by);
    assert_eq!(updated.updated_by, "editor");

    Ok(())
}

/// Tests that an absent category leaves the stored one alone.
///
/// Expected: category unchanged, title replaced
#[tokio::test]
async fn keeps_category_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let created = factory::board::BoardFactory::new(db, &user.user_id)
        .category(4)
        .build()
        .await?;

    let repo = BoardRepository::new(db);
    let updated = repo
        .update(UpdateBoardParam {
            board_number: created.board_number,
            board_category: None,
            board_title: "New".to_string(),
            board_write: "Body".to_string(),
            stamp: AuditStamp::system(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.board_category, 4);
    assert_eq!(updated.board_title, "New");

    Ok(())
}

/// Tests updating a board number that does not exist.
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
    let result = repo
        .update(UpdateBoardParam {
            board_number: 42,
            board_category: None,
            board_title: "T".to_string(),
            board_write: "W".to_string(),
            stamp: AuditStamp::system(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
