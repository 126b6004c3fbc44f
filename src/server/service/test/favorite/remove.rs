use super::*;

/// Tests the full add, list, remove cycle for one user.
///
/// Expected: List holds one favorite after add and none after remove
#[tokio::test]
async fn removes_added_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let param = FavoriteParam {
        user_id: user.id,
        target: FavoriteTarget::Planet(planet.id),
    };

    let service = FavoriteService::new(db);
    service.add(param).await?;
    assert_eq!(service.get_by_user(user.id).await?.len(), 1);

    service.remove(param).await?;
    assert!(service.get_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests that removal is not idempotent.
///
/// Expected: Second remove returns Err(AppError::NotFound("Favorite not found"))
#[tokio::test]
async fn second_remove_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_character_favorite(db, user.id, character.id).await?;
    let param = FavoriteParam {
        user_id: user.id,
        target: FavoriteTarget::Character(character.id),
    };

    let service = FavoriteService::new(db);
    service.remove(param).await?;
    let result = service.remove(param).await;

    assert!(
        matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Favorite not found")
    );

    Ok(())
}

/// Tests removing a favorite for a user that never existed.
///
/// Expected: Err(AppError::NotFound("Favorite not found"))
#[tokio::test]
async fn missing_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FavoriteService::new(db);
    let result = service
        .remove(FavoriteParam {
            user_id: 99,
            target: FavoriteTarget::Starship(1),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
