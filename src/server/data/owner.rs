//! Owner data repository.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::owner::{CreateOwnerParams, Owner};

/// Repository providing database operations for owners.
pub struct OwnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerRepository<'a> {
    /// Creates a new OwnerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OwnerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new owner.
    ///
    /// No uniqueness check is made on the email; a second owner with the same address
    /// is stored as a separate row.
    ///
    /// # Arguments
    /// - `params` - Validated owner fields with the email already normalized
    ///
    /// # Returns
    /// - `Ok(Owner)` - The created owner with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateOwnerParams) -> Result<Owner, DbErr> {
        let entity = entity::owner::ActiveModel {
            owner_first_name: ActiveValue::Set(params.first_name),
            owner_last_name: ActiveValue::Set(params.last_name),
            owner_email: ActiveValue::Set(params.email),
            owner_phone: ActiveValue::Set(params.phone),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Owner::from_entity(entity))
    }

    /// Finds an owner by email.
    ///
    /// The email must already be lowercased. The stored column is lowercased in the
    /// query, so rows written outside this API with mixed-case addresses still match.
    /// When several owners share the address the one registered first is returned.
    ///
    /// # Arguments
    /// - `email` - Normalized email address
    ///
    /// # Returns
    /// - `Ok(Some(Owner))` - The matching owner
    /// - `Ok(None)` - No owner is registered under this email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Owner>, DbErr> {
        let entity = entity::prelude::Owner::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::owner::Column::OwnerEmail))).eq(email),
            )
            .order_by_asc(entity::owner::Column::OwnerId)
            .one(self.db)
            .await?;

        Ok(entity.map(Owner::from_entity))
    }

    /// Finds an owner by ID.
    #[cfg(test)]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, DbErr> {
        let entity = entity::prelude::Owner::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Owner::from_entity))
    }
}
