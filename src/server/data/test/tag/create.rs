use super::*;

/// Tests creating a new tag.
///
/// Expected: Ok(Inserted) with tag created
#[tokio::test]
async fn creates_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let result = repo
        .create(CreateTagParams {
            name: "grammar".to_string(),
        })
        .await?;

    let tag = match result {
        InsertOutcome::Inserted(tag) => tag,
        other => panic!("expected tag to be created, got {:?}", other),
    };
    assert_eq!(tag.name, "grammar");

    let db_tag = entity::prelude::Tag::find_by_id(tag.id).one(db).await?;
    assert!(db_tag.is_some());

    Ok(())
}

/// Tests that a duplicate tag name is rejected by the unique index.
///
/// Expected: Ok(Conflict) with a single tag stored
#[tokio::test]
async fn reports_conflict_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::TagFactory::new(db).name("grammar").build().await?;

    let repo = TagRepository::new(db);
    let result = repo
        .create(CreateTagParams {
            name: "grammar".to_string(),
        })
        .await?;

    assert_eq!(result, InsertOutcome::Conflict);

    let count = entity::prelude::Tag::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
