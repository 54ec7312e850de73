use super::*;

/// Tests storing and reading back the logged-in user's id.
///
/// Expected: Ok(Some(user_id))
#[tokio::test]
async fn stores_and_returns_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth = AuthSession::new(session);
    auth.set_user_id(42).await?;

    assert_eq!(auth.get_user_id().await?, Some(42));

    Ok(())
}

/// Tests reading the user id from a fresh session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth = AuthSession::new(session);

    assert_eq!(auth.get_user_id().await?, None);

    Ok(())
}

/// Tests logging out.
///
/// After clearing the session, no user id must remain.
///
/// Expected: Ok(None) after clear
#[tokio::test]
async fn clear_removes_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth = AuthSession::new(session);
    auth.set_user_id(42).await?;
    auth.clear().await;

    assert_eq!(auth.get_user_id().await?, None);

    Ok(())
}
