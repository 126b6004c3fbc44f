use super::*;

/// Tests fetching a favorite by ID.
///
/// Expected: Ok for an existing favorite, Err(AppError::NotFound) otherwise
#[tokio::test]
async fn gets_favorite_or_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let row = factory::create_planet_favorite(db, user.id, planet.id).await?;

    let service = FavoriteService::new(db);

    let favorite = service.get_by_id(row.id).await?;
    assert_eq!(favorite.target, FavoriteTarget::Planet(planet.id));

    let missing = service.get_by_id(row.id + 1).await;
    assert!(
        matches!(missing, Err(AppError::NotFound(ref msg)) if msg == "Favorite not found")
    );

    Ok(())
}
