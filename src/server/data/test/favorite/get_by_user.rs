use super::*;

/// Tests listing a user's favorites across all kinds.
///
/// Verifies favorites are returned oldest first and other users' favorites are
/// excluded.
///
/// Expected: Ok with three favorites in insertion order
#[tokio::test]
async fn returns_user_favorites_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;
    let starship = factory::create_starship(db).await?;

    factory::create_starship_favorite(db, user.id, starship.id).await?;
    factory::create_planet_favorite(db, other.id, planet.id).await?;
    factory::create_planet_favorite(db, user.id, planet.id).await?;
    factory::create_character_favorite(db, user.id, character.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user(user.id).await?;

    let targets: Vec<_> = favorites.iter().map(|f| f.target).collect();
    assert_eq!(
        targets,
        vec![
            FavoriteTarget::Starship(starship.id),
            FavoriteTarget::Planet(planet.id),
            FavoriteTarget::Character(character.id),
        ]
    );
    assert!(favorites.iter().all(|f| f.user_id == user.id));

    Ok(())
}

/// Tests listing favorites for a user with none.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_user_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user(user.id).await?;

    assert!(favorites.is_empty());

    Ok(())
}
