use crate::server::{data::owner::OwnerRepository, model::owner::CreateOwnerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;

fn owner_params(email: &str) -> CreateOwnerParams {
    CreateOwnerParams {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        phone: "07000000000".to_string(),
    }
}
