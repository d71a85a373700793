use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car_at_show")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub car_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub show_ground_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::car::Entity",
        from = "Column::CarId",
        to = "super::car::Column::CarId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Car,
    #[sea_orm(
        belongs_to = "super::show_ground::Entity",
        from = "Column::ShowGroundId",
        to = "super::show_ground::Column::ShowGroundId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ShowGround,
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl Related<super::show_ground::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowGround.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
