use crate::server::{
    data::{deck::DeckRepository, InsertOutcome, WriteOutcome},
    model::deck::{CreateDeckParams, UpdateDeckParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod find_by_name;
mod get_all;
mod get_by_id;
mod update;
