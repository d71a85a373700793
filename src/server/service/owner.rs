use sea_orm::DatabaseConnection;

use crate::server::{
    data::owner::OwnerRepository,
    error::AppError,
    model::owner::{CreateOwnerParams, Owner},
};

pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new owner. Duplicate emails are accepted.
    pub async fn create(&self, params: CreateOwnerParams) -> Result<Owner, AppError> {
        let owner = OwnerRepository::new(self.db).create(params).await?;

        tracing::info!("Registered owner {}", owner.id);

        Ok(owner)
    }
}
