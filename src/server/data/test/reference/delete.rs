use super::*;

/// Tests that removing a target row removes favorites pointing at it.
///
/// Expected: Only the favorite of the surviving planet remains
#[tokio::test]
async fn deleting_target_cascades_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let doomed = factory::create_planet(db).await?;
    let kept = factory::create_planet(db).await?;
    factory::create_planet_favorite(db, user.id, doomed.id).await?;
    factory::create_planet_favorite(db, user.id, kept.id).await?;

    entity::prelude::Planet::delete_by_id(doomed.id)
        .exec(db)
        .await?;

    let remaining = entity::prelude::Favorite::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].planet_id, Some(kept.id));
    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 1);

    Ok(())
}
