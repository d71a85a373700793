use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub car_id: i32,
    pub car_brand: String,
    pub car_model: String,
    /// Year of manufacture, stored as the first day of that year.
    pub car_year: Date,
    pub car_reg: String,
    pub owner_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::OwnerId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::car_at_show::Entity")]
    CarAtShow,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::car_at_show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarAtShow.def()
    }
}

impl Related<super::show_ground::Entity> for Entity {
    fn to() -> RelationDef {
        super::car_at_show::Relation::ShowGround.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::car_at_show::Relation::Car.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
