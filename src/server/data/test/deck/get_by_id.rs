use super::*;

/// Tests fetching an existing deck.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_existing_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Deck)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deck = factory::deck::create_deck(db).await?;

    let repo = DeckRepository::new(db);
    let result = repo.get_by_id(deck.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, deck.id);
    assert_eq!(found.name, deck.name);

    Ok(())
}

/// Tests fetching a deck that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Deck)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::deck::create_deck(db).await?;

    let repo = DeckRepository::new(db);
    let result = repo.get_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
