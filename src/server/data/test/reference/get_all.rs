use super::*;

/// Tests listing reference rows ordered by ID.
///
/// Expected: Ok with rows in insertion order, empty for kinds with no rows
#[tokio::test]
async fn lists_rows_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hoth = factory::planet::PlanetFactory::new(db)
        .name("Hoth")
        .build()
        .await?;
    let endor = factory::planet::PlanetFactory::new(db)
        .name("Endor")
        .build()
        .await?;

    let planets = PlanetRepository::new(db).get_all().await?;
    let names: Vec<_> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec![hoth.name.as_str(), endor.name.as_str()]);

    assert!(CharacterRepository::new(db).get_all().await?.is_empty());
    assert!(StarshipRepository::new(db).get_all().await?.is_empty());

    Ok(())
}

/// Tests looking up a missing row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(CharacterRepository::new(db).find_by_id(1).await?.is_none());
    assert!(StarshipRepository::new(db).find_by_id(1).await?.is_none());

    Ok(())
}
