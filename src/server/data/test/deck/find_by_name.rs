use super::*;

/// Tests looking up a deck by its name.
///
/// Expected: Ok(Some) with the owning deck
#[tokio::test]
async fn finds_deck_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Deck)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deck = factory::deck::DeckFactory::new(db)
        .name("Hiragana")
        .build()
        .await?;
    factory::deck::create_deck(db).await?;

    let repo = DeckRepository::new(db);
    let result = repo.find_by_name("Hiragana").await?;

    assert_eq!(result.map(|d| d.id), Some(deck.id));

    Ok(())
}

/// Tests looking up a name no deck uses.
///
/// A free name is an expected outcome, not an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_free_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Deck)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::deck::DeckFactory::new(db)
        .name("Hiragana")
        .build()
        .await?;

    let repo = DeckRepository::new(db);
    let result = repo.find_by_name("Katakana").await?;

    assert!(result.is_none());

    Ok(())
}
