use crate::server::{
    data::car_at_show::CarAtShowRepository, model::car_at_show::CreateCarAtShowParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_cars_by_show;
