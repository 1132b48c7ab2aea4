use super::*;

/// Tests listing every stored card.
///
/// Expected: Ok with one entry per card, empty before any insert
#[tokio::test]
async fn returns_all_cards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    factory::card::create_card(db).await?;
    factory::card::CardFactory::new(db).build().await?;

    let cards = repo.get_all().await?;
    assert_eq!(cards.len(), 2);

    Ok(())
}
