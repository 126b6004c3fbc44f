use super::*;

/// Tests finding a favorite by ID.
///
/// Expected: Ok(Some) with the starship target
#[tokio::test]
async fn finds_existing_favorite() -> Result<(), DbErr> {
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
    let favorite = repo.find_by_id(row.id).await?;

    assert!(favorite.is_some());
    let favorite = favorite.unwrap();
    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.target, FavoriteTarget::Starship(starship.id));

    Ok(())
}

/// Tests finding a favorite that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FavoriteRepository::new(db);
    let favorite = repo.find_by_id(42).await?;

    assert!(favorite.is_none());

    Ok(())
}
