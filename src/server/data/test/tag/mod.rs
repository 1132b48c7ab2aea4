use crate::server::{
    data::{tag::TagRepository, InsertOutcome, WriteOutcome},
    model::tag::{CreateTagParams, UpdateTagParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod find_by_name;
mod get_all;
mod get_by_id;
mod update;
