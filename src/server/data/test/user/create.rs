use super::*;

/// Tests inserting a user with every column supplied.
///
/// Verifies that the repository stores all fields and stamps both audit pairs
/// from the supplied stamp.
///
/// Expected: Ok with stored fields and System audit columns
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let mut param = create_param("u1", Some("ann"));
    param.user_image = Some(vec![1, 2, 3]);

    let user = repo.create(param).await?;

    assert_eq!(user.user_id, "u1");
    assert_eq!(user.user_name, "Ann");
    assert_eq!(user.user_nickname.as_deref(), Some("ann"));
    assert_eq!(user.user_password, "p");
    assert_eq!(user.user_image, Some(vec![1, 2, 3]));
    assert_eq!(user.user_level, 1);
    assert_eq!(user.created_by, "System");
    assert_eq!(user.updated_by, "System");
    assert_eq!(user.created_date, user.updated_date);

    Ok(())
}

/// Tests inserting users without nicknames.
///
/// Verifies that the nullable unique nickname column accepts several nulls.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_multiple_null_nicknames() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("u1", None)).await?;
    repo.create(create_param("u2", None)).await?;

    assert_eq!(repo.find_all().await?.len(), 2);

    Ok(())
}

/// Tests inserting a second user with an existing id.
///
/// Verifies that no silent overwrite happens; the primary key refuses the row.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("u1", Some("ann"))).await?;

    let result = repo.create(create_param("u1", Some("bob"))).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests inserting a second user with an existing nickname.
///
/// Expected: Err from the unique index
#[tokio::test]
async fn fails_for_duplicate_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("u1", Some("ann"))).await?;

    let result = repo.create(create_param("u2", Some("ann"))).await;

    assert!(result.is_err());

    Ok(())
}
