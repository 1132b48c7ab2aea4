use crate::server::{
    data::card::CardRepository,
    model::card::{Card, CreateCardParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod get_all;
mod get_by_id;
mod update;
