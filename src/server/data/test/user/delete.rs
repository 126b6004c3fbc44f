use super::*;

/// Tests deleting a user together with their favorites.
///
/// Verifies the foreign key cascade removes the user's favorites while leaving
/// other users' favorites and the targets in place.
///
/// Expected: Ok(true) with only the other user's favorite remaining
#[tokio::test]
async fn deletes_user_and_cascades_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let starship = factory::create_starship(db).await?;
    factory::create_planet_favorite(db, user.id, planet.id).await?;
    factory::create_starship_favorite(db, user.id, starship.id).await?;
    factory::create_planet_favorite(db, other.id, planet.id).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert!(deleted);
    assert!(!repo.exists(user.id).await?);
    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Planet::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(1).await?);

    Ok(())
}
