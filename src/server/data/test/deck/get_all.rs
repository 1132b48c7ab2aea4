use super::*;

/// Tests listing decks from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Deck)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db);
    let decks = repo.get_all().await?;

    assert!(decks.is_empty());

    Ok(())
}

/// Tests listing decks sorted by name.
///
/// Expected: Ok with all decks in alphabetical order
#[tokio::test]
async fn returns_decks_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Deck)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Verbs", "Adjectives", "Nouns"] {
        factory::deck::DeckFactory::new(db).name(name).build().await?;
    }

    let repo = DeckRepository::new(db);
    let decks = repo.get_all().await?;

    let names: Vec<&str> = decks.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Adjectives", "Nouns", "Verbs"]);

    Ok(())
}
