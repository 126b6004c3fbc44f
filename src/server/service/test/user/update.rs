use super::*;

/// Tests updating the display name only.
///
/// Expected: Ok with new name, password untouched
#[tokio::test]
async fn updates_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update(
            user.id,
            UpdateUserParam {
                name: Some("Rey".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name.as_deref(), Some("Rey"));
    assert_eq!(updated.username, user.username);
    assert_eq!(stored_password(db, user.id).await, user.password);

    Ok(())
}

/// Tests that a new password is hashed before it is stored.
///
/// Expected: Ok with a stored hash verifying against the new password
#[tokio::test]
async fn hashes_new_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    UserService::new(db)
        .update(
            user.id,
            UpdateUserParam {
                password: Some("itsatrap".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let stored = stored_password(db, user.id).await;
    let hash = PasswordHash::new(&stored).unwrap();
    assert!(Argon2::default().verify_password(b"itsatrap", &hash).is_ok());

    Ok(())
}

/// Tests an update with no fields.
///
/// Expected: Ok with the user unchanged, or NotFound for a missing user
#[tokio::test]
async fn empty_update_returns_current_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    let unchanged = service.update(user.id, UpdateUserParam::default()).await?;
    assert_eq!(unchanged.username, user.username);

    let missing = service.update(user.id + 1, UpdateUserParam::default()).await;
    assert!(matches!(missing, Err(AppError::NotFound(ref msg)) if msg == "User not found"));

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Err(AppError::NotFound("User not found"))
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .update(
            3,
            UpdateUserParam {
                email: Some("ghost@nowhere.net".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "User not found"));

    Ok(())
}
