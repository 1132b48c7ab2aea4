use super::*;

/// Tests looking up tags by name, both taken and free.
///
/// Expected: Some for the stored name, None otherwise
#[tokio::test]
async fn resolves_taken_and_free_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::TagFactory::new(db)
        .name("kanji")
        .build()
        .await?;

    let repo = TagRepository::new(db);

    let taken = repo.find_by_name("kanji").await?;
    assert_eq!(taken.map(|t| t.id), Some(tag.id));

    let free = repo.find_by_name("kana").await?;
    assert!(free.is_none());

    Ok(())
}
