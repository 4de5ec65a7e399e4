use super::*;

/// Tests id existence checks.
///
/// Expected: true for a stored id, false otherwise
#[tokio::test]
async fn checks_id_existence() -> Result<(), DbErr> {
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

    assert!(repo.exists_by_id("u1").await?);
    assert!(!repo.exists_by_id("u2").await?);

    Ok(())
}

/// Tests nickname existence checks.
///
/// Expected: true for a stored nickname, false otherwise
#[tokio::test]
async fn checks_nickname_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nickname(Some("ann"))
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists_by_nickname("ann").await?);
    assert!(!repo.exists_by_nickname("bob").await?);

    Ok(())
}
