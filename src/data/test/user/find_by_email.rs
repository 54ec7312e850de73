use super::*;

/// Tests finding a user by email address.
///
/// Verifies that the repository returns the matching user when one exists
/// with the given address.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("lookup@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("lookup@example.com").await?;

    assert_eq!(result, Some(user));

    Ok(())
}

/// Tests looking up an email address with no matching user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("nobody@example.com").await?;

    assert!(result.is_none());

    Ok(())
}
