use super::*;

/// Tests renaming an existing deck.
///
/// Expected: Ok(Written) with the new name persisted
#[tokio::test]
async fn renames_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Deck)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deck = factory::deck::DeckFactory::new(db)
        .name("Old Name")
        .build()
        .await?;

    let repo = DeckRepository::new(db);
    let result = repo
        .update(UpdateDeckParams {
            id: deck.id,
            name: "New Name".to_string(),
        })
        .await?;

    let updated = match result {
        WriteOutcome::Written(updated) => updated,
        other => panic!("expected deck to be updated, got {:?}", other),
    };
    assert_eq!(updated.id, deck.id);
    assert_eq!(updated.name, "New Name");

    let db_deck = entity::prelude::Deck::find_by_id(deck.id).one(db).await?;
    assert_eq!(db_deck.unwrap().name, "New Name");

    Ok(())
}

/// Tests updating a deck that doesn't exist.
///
/// Expected: Ok(Missing) and no row inserted
#[tokio::test]
async fn reports_missing_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Deck)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db);
    let result = repo
        .update(UpdateDeckParams {
            id: Uuid::new_v4(),
            name: "Ghost".to_string(),
        })
        .await?;

    assert_eq!(result, WriteOutcome::Missing);

    let count = entity::prelude::Deck::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests renaming a deck to a name owned by another deck.
///
/// The unique index rejects the update even though no check ran beforehand.
///
/// Expected: Ok(Conflict) with both decks unchanged
#[tokio::test]
async fn reports_conflict_for_taken_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Deck)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::deck::DeckFactory::new(db)
        .name("Taken")
        .build()
        .await?;
    let deck = factory::deck::DeckFactory::new(db)
        .name("Mine")
        .build()
        .await?;

    let repo = DeckRepository::new(db);
    let result = repo
        .update(UpdateDeckParams {
            id: deck.id,
            name: "Taken".to_string(),
        })
        .await?;

    assert_eq!(result, WriteOutcome::Conflict);

    let db_deck = entity::prelude::Deck::find_by_id(deck.id).one(db).await?;
    assert_eq!(db_deck.unwrap().name, "Mine");

    Ok(())
}
