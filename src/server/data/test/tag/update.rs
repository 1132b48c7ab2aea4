use super::*;

/// Tests renaming an existing tag.
///
/// Expected: Ok(Written) with new name
#[tokio::test]
async fn renames_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::create_tag(db).await?;

    let repo = TagRepository::new(db);
    let result = repo
        .update(UpdateTagParams {
            id: tag.id,
            name: "verbs".to_string(),
        })
        .await?;

    let updated = match result {
        WriteOutcome::Written(updated) => updated,
        other => panic!("expected tag to be updated, got {:?}", other),
    };
    assert_eq!(updated.id, tag.id);
    assert_eq!(updated.name, "verbs");

    Ok(())
}

/// Tests updating a tag that doesn't exist.
///
/// Expected: Ok(Missing)
#[tokio::test]
async fn reports_missing_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let result = repo
        .update(UpdateTagParams {
            id: Uuid::new_v4(),
            name: "verbs".to_string(),
        })
        .await?;

    assert_eq!(result, WriteOutcome::Missing);

    Ok(())
}

/// Tests renaming a tag onto a name another tag owns.
///
/// Expected: Ok(Conflict)
#[tokio::test]
async fn reports_conflict_for_taken_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::TagFactory::new(db).name("nouns").build().await?;
    let tag = factory::tag::create_tag(db).await?;

    let repo = TagRepository::new(db);
    let result = repo
        .update(UpdateTagParams {
            id: tag.id,
            name: "nouns".to_string(),
        })
        .await?;

    assert_eq!(result, WriteOutcome::Conflict);

    Ok(())
}
