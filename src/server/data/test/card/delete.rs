use super::*;

/// Tests deleting a card, then deleting it again.
///
/// Expected: Ok both times with the card gone
#[tokio::test]
async fn deletes_card_idempotently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::card::create_card(db).await?;

    let repo = CardRepository::new(db);
    repo.delete(card.id).await?;
    repo.delete(card.id).await?;

    let check = entity::prelude::Card::find_by_id(card.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}
