use super::*;

/// Tests fetching an existing tag.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_existing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::create_tag(db).await?;

    let repo = TagRepository::new(db);
    let found = repo.get_by_id(tag.id).await?.unwrap();

    assert_eq!(found.id, tag.id);
    assert_eq!(found.name, tag.name);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::create_tag(db).await?;

    let repo = TagRepository::new(db);

    assert!(repo.get_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
