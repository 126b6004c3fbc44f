use super::*;

/// Tests creating a user stores an Argon2 hash instead of the plain password.
///
/// Expected: Ok with a hash that verifies against the original password
#[tokio::test]
async fn stores_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .create(create_param("ben", "ben@jundland.net"))
        .await?;

    assert_eq!(user.username, "ben");
    assert_eq!(user.name.as_deref(), Some("Obi-Wan Kenobi"));

    let stored = stored_password(db, user.id).await;
    assert_ne!(stored, "usetheforce");
    let hash = PasswordHash::new(&stored).unwrap();
    assert!(Argon2::default()
        .verify_password(b"usetheforce", &hash)
        .is_ok());

    Ok(())
}

/// Tests creating a user with a taken email.
///
/// Expected: Err(AppError::Conflict("Username or email already in use"))
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ben@jundland.net")
        .build()
        .await?;

    let result = UserService::new(db)
        .create(create_param("ben", "ben@jundland.net"))
        .await;

    assert!(
        matches!(result, Err(AppError::Conflict(ref msg)) if msg == "Username or email already in use")
    );
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests that surrounding whitespace in a password survives validation and hashing.
///
/// Expected: Stored hash verifies against "  secret  " and not against "secret"
#[tokio::test]
async fn hashes_password_with_surrounding_whitespace() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = CreateUserParam::from_dto(CreateUserDto {
        username: Some("lando".to_string()),
        email: Some("lando@bespin.net".to_string()),
        password: Some("  secret  ".to_string()),
        name: None,
    })?;

    let user = UserService::new(db).create(param).await?;

    let stored = stored_password(db, user.id).await;
    let hash = PasswordHash::new(&stored).unwrap();
    assert!(Argon2::default()
        .verify_password(b"  secret  ", &hash)
        .is_ok());
    assert!(Argon2::default().verify_password(b"secret", &hash).is_err());

    Ok(())
}
