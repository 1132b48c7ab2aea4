use super::*;

/// Tests overwriting the fields of an existing card.
///
/// Expected: Ok(Some) with the new values stored
#[tokio::test]
async fn overwrites_card_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::card::create_card(db).await?;

    let repo = CardRepository::new(db);
    let result = repo
        .update(Card {
            id: card.id,
            name: None,
            front_content: Some("New front".to_string()),
            back_content: Some("New back".to_string()),
        })
        .await?;

    let updated = result.expect("card should have been updated");
    assert_eq!(updated.id, card.id);
    assert!(updated.name.is_none());
    assert_eq!(updated.front_content.as_deref(), Some("New front"));
    assert_eq!(updated.back_content.as_deref(), Some("New back"));

    Ok(())
}

/// Tests updating a card that doesn't exist.
///
/// Expected: Ok(None) and no card inserted
#[tokio::test]
async fn reports_missing_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardRepository::new(db);
    let result = repo
        .update(Card {
            id: Uuid::new_v4(),
            name: Some("Ghost".to_string()),
            front_content: None,
            back_content: None,
        })
        .await?;

    assert!(result.is_none());

    let count = entity::prelude::Card::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
