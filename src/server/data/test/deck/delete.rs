use super::*;

/// Tests deleting a deck.
///
/// Expected: Ok with deck removed
#[tokio::test]
async fn deletes_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Deck)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deck = factory::deck::create_deck(db).await?;

    let repo = DeckRepository::new(db);
    let result = repo.delete(deck.id).await;

    assert!(result.is_ok());

    let check = entity::prelude::Deck::find_by_id(deck.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a deck that doesn't exist.
///
/// Delete is idempotent and leaves other decks untouched.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Deck)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::deck::create_deck(db).await?;

    let repo = DeckRepository::new(db);
    let result = repo.delete(Uuid::new_v4()).await;

    assert!(result.is_ok());

    let count = entity::prelude::Deck::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
