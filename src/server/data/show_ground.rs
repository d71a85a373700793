//! Show ground data repository.
//!
//! Show grounds are created outside this API, so the repository is read-only.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::show_ground::ShowGround;

/// Repository providing read access to show grounds.
pub struct ShowGroundRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShowGroundRepository<'a> {
    /// Creates a new ShowGroundRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ShowGroundRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every show ground, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<ShowGround>)` - All show grounds, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<ShowGround>, DbErr> {
        let entities = entity::prelude::ShowGround::find()
            .order_by_asc(entity::show_ground::Column::ShowGroundId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ShowGround::from_entity).collect())
    }

    /// Finds a show ground by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the show ground to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(ShowGround))` - The show ground if found
    /// - `Ok(None)` - No show ground exists with this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ShowGround>, DbErr> {
        let entity = entity::prelude::ShowGround::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ShowGround::from_entity))
    }
}
