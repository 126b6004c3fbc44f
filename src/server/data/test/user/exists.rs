use super::*;

/// Tests existence checks for present and absent users.
///
/// Expected: true for a created user, false otherwise
#[tokio::test]
async fn reports_user_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists(user.id).await?);
    assert!(!repo.exists(user.id + 1).await?);

    Ok(())
}

/// Tests listing users ordered by ID.
///
/// Expected: Ok with both users in creation order
#[tokio::test]
async fn gets_all_users_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let ids: Vec<_> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
