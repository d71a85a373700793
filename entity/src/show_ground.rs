use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "show_ground")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub show_ground_id: i32,
    pub show_name: String,
    pub show_country: String,
    pub show_county: String,
    pub show_postcode: String,
    pub show_date: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub show_description: Option<String>,
    /// Stored as TINYINT(1) on MySQL.
    pub finished: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::car_at_show::Entity")]
    CarAtShow,
}

impl Related<super::car_at_show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarAtShow.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
