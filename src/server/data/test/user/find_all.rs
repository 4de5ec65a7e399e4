use super::*;

/// Tests listing users on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.find_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests listing users ordered by id.
///
/// Expected: Ok with users sorted by user id
#[tokio::test]
async fn returns_users_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_id("charlie")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .user_id("alice")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .user_id("bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let users = repo.find_all().await?;

    let ids: Vec<_> = users.iter().map(|u| u.user_id.as_str()).collect();
    assert_eq!(ids, vec!["alice", "bob", "charlie"]);

    Ok(())
}
