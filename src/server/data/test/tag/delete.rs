use super::*;

/// Tests deleting a tag.
///
/// Expected: Ok with tag removed
#[tokio::test]
async fn deletes_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::create_tag(db).await?;

    TagRepository::new(db).delete(tag.id).await?;

    let check = entity::prelude::Tag::find_by_id(tag.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a tag that doesn't exist.
///
/// Expected: Ok with other tags untouched
#[tokio::test]
async fn succeeds_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::create_tag(db).await?;

    TagRepository::new(db).delete(Uuid::new_v4()).await?;

    let count = entity::prelude::Tag::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
