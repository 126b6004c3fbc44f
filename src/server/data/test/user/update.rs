use super::*;

/// Tests a partial update.
///
/// Verifies only the provided field changes.
///
/// Expected: Ok(Some) with new email and unchanged username
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("leia")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParam {
                email: Some("leia@alderaan.gov".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.username, "leia");
    assert_eq!(updated.email, "leia@alderaan.gov");
    assert_eq!(updated.name, user.name);

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            7,
            UpdateUserParam {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests that an update cannot take another user's username.
///
/// Expected: Err with UniqueConstraintViolation
#[tokio::test]
async fn rejects_taken_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("vader")
        .build()
        .await?;
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            user.id,
            UpdateUserParam {
                username: Some("vader".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
