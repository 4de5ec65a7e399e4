use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some(User)) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .user_id("u1")
        .name("Ann")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id("u1").await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.user_id, created.user_id);
    assert_eq!(user.user_name, "Ann");

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_id("missing").await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that ids are matched case-sensitively.
///
/// Expected: Ok(None) for a differently cased id
#[tokio::test]
async fn matches_id_exactly() -> Result<(), DbErr> {
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

    assert!(repo.find_by_id("U1").await?.is_none());

    Ok(())
}
