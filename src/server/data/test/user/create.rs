use super::*;

fn param(username: &str, email: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        email: email.to_string(),
        password: "hashed".to_string(),
        name: None,
    }
}

/// Tests creating a new user.
///
/// Expected: Ok with the stored password written to the row but absent from the model
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("luke", "luke@tatooine.net")).await?;

    assert_eq!(user.username, "luke");
    assert_eq!(user.email, "luke@tatooine.net");
    assert!(user.name.is_none());

    let row = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.password, "hashed");

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err with UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("han", "han@falcon.net")).await?;
    let result = repo.create(param("han", "solo@falcon.net")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that emails are unique.
///
/// Expected: Err with UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("han", "han@falcon.net")).await?;
    let result = repo.create(param("solo", "han@falcon.net")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
