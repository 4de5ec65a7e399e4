use super::*;

/// Tests finding a user by nickname.
///
/// Expected: Ok(Some(User)) with the owning id
#[tokio::test]
async fn finds_user_by_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_id("u1")
        .nickname(Some("ann"))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_nickname("ann").await?;

    assert_eq!(user.map(|u| u.user_id), Some("u1".to_string()));

    Ok(())
}

/// Tests finding a nickname nobody uses.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_nickname("nobody").await?.is_none());

    Ok(())
}

/// Tests finding a user by nickname and id together.
///
/// Verifies that both values must belong to the same row.
///
/// Expected: Some for the matching pair, None for a mismatched pair
#[tokio::test]
async fn requires_nickname_and_id_to_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_id("u1")
        .nickname(Some("ann"))
        .password("secret")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .user_id("u2")
        .nickname(Some("bob"))
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let matched = repo.find_by_nickname_and_id("ann", "u1").await?;
    assert_eq!(matched.map(|u| u.user_password), Some("secret".to_string()));

    assert!(repo.find_by_nickname_and_id("ann", "u2").await?.is_none());

    Ok(())
}
