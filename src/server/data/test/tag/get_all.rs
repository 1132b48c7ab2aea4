use super::*;

/// Tests listing tags from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tags = TagRepository::new(db).get_all().await?;

    assert!(tags.is_empty());

    Ok(())
}

/// Tests listing tags sorted by name.
///
/// Expected: Ok with all tags in alphabetical order
#[tokio::test]
async fn returns_tags_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["n3", "n5", "n4"] {
        factory::tag::TagFactory::new(db).name(name).build().await?;
    }

    let tags = TagRepository::new(db).get_all().await?;

    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["n3", "n4", "n5"]);

    Ok(())
}
