use super::*;

/// Tests overwriting the mutable columns of a user.
///
/// Verifies that every mutable column and the updated audit pair change while
/// the created audit pair stays as stored.
///
/// Expected: Ok with new values and unchanged created-by
#[tokio::test]
async fn overwrites_mutable_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(create_param("u1", Some("ann"))).await?;

    let mut param = UpdateUserParam::from_user(created.clone(), AuditStamp::by("admin"));
    param.user_name = "Annie".to_string();
    param.user_nickname = Some("annie".to_string());
    param.user_password = "new".to_string();
    param.user_level = 3;
    param.user_image = Some(vec![9]);

    let updated = repo.update(param).await?;

    assert_eq!(updated.user_name, "Annie");
    assert_eq!(updated.user_nickname.as_deref(), Some("annie"));
    assert_eq!(updated.user_password, "new");
    assert_eq!(updated.user_level, 3);
    assert_eq!(updated.user_image, Some(vec![9]));
    assert_eq!(updated.updated_by, "admin");
    assert_eq!(updated.created_by, created.created_by);
    assert_eq!(updated.created_date, created.created_date);

    let stored = repo.find_by_id("u1").await?.unwrap();
    assert_eq!(stored.user_name, "Annie");
    assert_eq!(stored.updated_by, "admin");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(create_param("u1", None)).await?;

    let mut param = UpdateUserParam::from_user(created, AuditStamp::system());
    param.user_id = "missing".to_string();

    let result = repo.update(param).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
