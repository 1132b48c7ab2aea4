use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{tag::TagRepository, InsertOutcome, WriteOutcome},
    error::{
        entity::{EntityError, EntityKind},
        AppError,
    },
    model::tag::{CreateTagParams, Tag, UpdateTagParams},
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a tag by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Tag, AppError> {
        let repo = TagRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Gets all tags, possibly none
    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        let repo = TagRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a new tag, failing with `NameConflict` if the name is taken
    pub async fn create(&self, params: CreateTagParams) -> Result<Tag, AppError> {
        let repo = TagRepository::new(self.db);
        let name = params.name.clone();

        match repo.create(params).await? {
            InsertOutcome::Inserted(tag) => Ok(tag),
            InsertOutcome::Conflict => Err(name_conflict(name).into()),
        }
    }

    /// Renames a tag
    ///
    /// Same rules as `DeckService::update`: a name owned by a different tag is a
    /// `NameConflict`, an unknown ID is `NotFound`.
    pub async fn update(&self, params: UpdateTagParams) -> Result<Tag, AppError> {
        let repo = TagRepository::new(self.db);
        let (id, name) = (params.id, params.name.clone());

        if let Some(owner) = repo.find_by_name(&name).await? {
            if owner.id != id {
                return Err(name_conflict(name).into());
            }
        }

        match repo.update(params).await? {
            WriteOutcome::Written(tag) => Ok(tag),
            WriteOutcome::Missing => Err(not_found(id).into()),
            WriteOutcome::Conflict => Err(name_conflict(name).into()),
        }
    }

    /// Deletes a tag, succeeding whether or not it existed
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = TagRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }
}

fn not_found(id: Uuid) -> EntityError {
    EntityError::NotFound {
        kind: EntityKind::Tag,
        id,
    }
}

fn name_conflict(name: String) -> EntityError {
    EntityError::NameConflict {
        kind: EntityKind::Tag,
        name,
    }
}
