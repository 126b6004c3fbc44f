use super::*;

/// Tests deleting a favorite by ID.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let row = factory::create_planet_favorite(db, user.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo.delete(row.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting when nothing matches.
///
/// Expected: Ok(false) with other favorites untouched
#[tokio::test]
async fn returns_false_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let starship = factory::create_starship(db).await?;
    let row = factory::create_starship_favorite(db, user.id, starship.id).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo.delete(row.id + 1).await?;

    assert!(!deleted);
    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 1);

    Ok(())
}
