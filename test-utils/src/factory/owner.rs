//! Owner factory for creating test owner entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test owners with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::owner::OwnerFactory;
///
/// let owner = OwnerFactory::new(&db)
///     .email("jane@example.com")
///     .first_name("Jane")
///     .build()
///     .await?;
/// ```
pub struct OwnerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
}

impl<'a> OwnerFactory<'a> {
    /// Creates a new OwnerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Owner"`
    /// - last_name: `"{id}"`
    /// - email: `"owner{id}@example.com"`
    /// - phone: `"0700000{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Owner".to_string(),
            last_name: id.to_string(),
            email: format!("owner{}@example.com", id),
            phone: format!("0700000{}", id),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the email exactly as given; no case normalization is applied.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Builds and inserts the owner entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::owner::Model)` - Created owner entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::owner::Model, DbErr> {
        entity::owner::ActiveModel {
            owner_first_name: ActiveValue::Set(self.first_name),
            owner_last_name: ActiveValue::Set(self.last_name),
            owner_email: ActiveValue::Set(self.email),
            owner_phone: ActiveValue::Set(self.phone),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an owner with default values.
///
/// Shorthand for `OwnerFactory::new(db).build().await`.
pub async fn create_owner(db: &DatabaseConnection) -> Result<entity::owner::Model, DbErr> {
    OwnerFactory::new(db).build().await
}

/// Creates an owner with a specific email.
pub async fn create_owner_with_email(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::owner::Model, DbErr> {
    OwnerFactory::new(db).email(email).build().await
}
