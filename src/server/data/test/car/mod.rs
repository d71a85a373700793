use crate::server::{
    data::car::CarRepository,
    model::car::{CarChanges, CreateCarParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists_for_owner;
mod find_by_reg_and_owner;
mod update;

fn car_params(reg: &str) -> CreateCarParams {
    CreateCarParams {
        brand: "Ford".to_string(),
        model: "Capri".to_string(),
        year: NaiveDate::from_ymd_opt(1978, 1, 1).unwrap(),
        reg: reg.to_string(),
        owner_email: String::new(),
    }
}
