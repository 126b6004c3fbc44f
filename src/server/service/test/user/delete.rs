use super::*;

/// Tests deleting a user removes their favorites.
///
/// Expected: Ok with no favorites left and the user gone
#[tokio::test]
async fn deletes_user_with_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_planet_favorite(db, user.id, planet.id).await?;

    let service = UserService::new(db);
    service.delete(user.id).await?;

    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 0);
    assert!(matches!(
        service.get_by_id(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a missing user.
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

    let result = UserService::new(db).delete(1).await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "User not found"));

    Ok(())
}
