use super::*;

/// Tests fetching an existing card.
///
/// Expected: Ok(Some) with every field matching the stored row
#[tokio::test]
async fn returns_existing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::card::CardFactory::new(db)
        .name("Water")
        .front_content("みず")
        .build()
        .await?;

    let found = CardRepository::new(db).get_by_id(card.id).await?.unwrap();

    assert_eq!(found.id, card.id);
    assert_eq!(found.name.as_deref(), Some("Water"));
    assert_eq!(found.front_content.as_deref(), Some("みず"));
    assert!(found.back_content.is_none());

    Ok(())
}

/// Tests fetching a card that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CardRepository::new(db).get_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
