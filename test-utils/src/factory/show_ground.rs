//! Show ground factory for creating test show entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test show grounds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::show_ground::ShowGroundFactory;
///
/// let show = ShowGroundFactory::new(&db)
///     .name("Summer Classic")
///     .date(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap())
///     .build()
///     .await?;
/// ```
pub struct ShowGroundFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    country: String,
    county: String,
    postcode: String,
    date: NaiveDate,
    description: Option<String>,
    finished: bool,
}

impl<'a> ShowGroundFactory<'a> {
    /// Creates a new ShowGroundFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Show {id}"`
    /// - country: `"England"`, county: `"Kent"`, postcode: `"ME1 1AA"`
    /// - date: 2025-06-01
    /// - description: `None`
    /// - finished: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Show {}", id),
            country: "England".to_string(),
            county: "Kent".to_string(),
            postcode: "ME1 1AA".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default(),
            description: None,
            finished: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn finished(mut self, finished: bool) -> Self {
        self.finished = finished;
        self
    }

    /// Builds and inserts the show ground entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::show_ground::Model)` - Created show ground entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::show_ground::Model, DbErr> {
        entity::show_ground::ActiveModel {
            show_name: ActiveValue::Set(self.name),
            show_country: ActiveValue::Set(self.country),
            show_county: ActiveValue::Set(self.county),
            show_postcode: ActiveValue::Set(self.postcode),
            show_date: ActiveValue::Set(self.date),
            show_description: ActiveValue::Set(self.description),
            finished: ActiveValue::Set(self.finished),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a show ground with default values.
pub async fn create_show_ground(
    db: &DatabaseConnection,
) -> Result<entity::show_ground::Model, DbErr> {
    ShowGroundFactory::new(db).build().await
}
