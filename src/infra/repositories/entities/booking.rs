//! Booking database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Booking, BookingStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub studio_id: i32,
    pub booking_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    /// Wire integer: 0 = pending, 1 = confirmed, 2 = cancelled
    pub status: i32,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub total_price: Decimal,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::studio::Entity",
        from = "Column::StudioId",
        to = "super::studio::Column::Id"
    )]
    Studio,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::studio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Studio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// A status value outside 0..=2 cannot be written through the
/// application; an out-of-range row falls back to Pending rather
/// than failing the whole query.
impl From<Model> for Booking {
    fn from(model: Model) -> Self {
        Booking {
            id: model.id,
            user_id: model.user_id,
            studio_id: model.studio_id,
            booking_date: model.booking_date,
            start_time: model.start_time,
            end_time: model.end_time,
            status: BookingStatus::try_from(model.status).unwrap_or(BookingStatus::Pending),
            total_price: model.total_price,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
