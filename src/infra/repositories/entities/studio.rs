//! Studio database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Studio;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "studios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub hourly_rate: Decimal,
    pub max_capacity: i32,
    pub location: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Studio {
    fn from(model: Model) -> Self {
        Studio {
            id: model.id,
            name: model.name,
            description: model.description,
            hourly_rate: model.hourly_rate,
            max_capacity: model.max_capacity,
            location: model.location,
            created_at: model.created_at,
        }
    }
}
