//! Studio domain entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Studio domain entity.
///
/// Studios are a read-only catalog during booking evaluation; the
/// engine never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Studio {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub hourly_rate: Decimal,
    pub max_capacity: i32,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Studio response (public catalog view)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudioResponse {
    /// Unique studio identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    #[schema(example = "Red Studio")]
    pub name: String,
    /// Free-text description
    #[schema(example = "Compact recording room for solo and duo sessions.")]
    pub description: Option<String>,
    /// Price per hour, two decimal places
    #[schema(value_type = f64, example = 45.00)]
    pub hourly_rate: Decimal,
    /// Maximum number of people
    #[schema(example = 3)]
    pub max_capacity: i32,
    /// Location within the building
    #[schema(example = "Floor 1, Room A")]
    pub location: Option<String>,
}

impl From<Studio> for StudioResponse {
    fn from(studio: Studio) -> Self {
        Self {
            id: studio.id,
            name: studio.name,
            description: studio.description,
            hourly_rate: studio.hourly_rate,
            max_capacity: studio.max_capacity,
            location: studio.location,
        }
    }
}
