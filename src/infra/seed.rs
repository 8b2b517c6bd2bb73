//! Development seed data.
//!
//! Idempotently upserts the studio catalog and the default manager
//! and admin accounts. Running the seed command twice leaves the
//! database unchanged.

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::repositories::entities::{studio, user};
use crate::domain::{Password, UserRole};
use crate::errors::{AppError, AppResult};

const SEED_PASSWORD: &str = "password123";

struct StudioFixture {
    name: &'static str,
    description: &'static str,
    hourly_rate: Decimal,
    max_capacity: i32,
    location: &'static str,
}

fn studio_fixtures() -> Vec<StudioFixture> {
    vec![
        StudioFixture {
            name: "Red Studio",
            description: "Compact recording room for solo and duo sessions.",
            hourly_rate: Decimal::new(4500, 2),
            max_capacity: 3,
            location: "Floor 1, Room A",
        },
        StudioFixture {
            name: "Blue Studio",
            description: "Mid-size room for podcasts and vocal groups.",
            hourly_rate: Decimal::new(6500, 2),
            max_capacity: 6,
            location: "Floor 2, Room B",
        },
        StudioFixture {
            name: "Green Studio",
            description: "Large multipurpose studio with isolation booth.",
            hourly_rate: Decimal::new(9000, 2),
            max_capacity: 10,
            location: "Floor 3, Room C",
        },
    ]
}

/// Seed the studio catalog and default elevated accounts.
pub async fn seed(db: &DatabaseConnection) -> AppResult<()> {
    for fixture in studio_fixtures() {
        ensure_studio(db, &fixture).await?;
    }

    ensure_user(db, "manager@studioflow.local", "Test", "Manager", UserRole::Manager).await?;
    ensure_user(db, "admin@studioflow.local", "Test", "Admin", UserRole::Admin).await?;

    tracing::info!("Seed data applied");
    Ok(())
}

async fn ensure_studio(db: &DatabaseConnection, fixture: &StudioFixture) -> AppResult<()> {
    let existing = studio::Entity::find()
        .filter(studio::Column::Name.eq(fixture.name))
        .one(db)
        .await
        .map_err(AppError::from)?;

    match existing {
        None => {
            let model = studio::ActiveModel {
                name: Set(fixture.name.to_string()),
                description: Set(Some(fixture.description.to_string())),
                hourly_rate: Set(fixture.hourly_rate),
                max_capacity: Set(fixture.max_capacity),
                location: Set(Some(fixture.location.to_string())),
                created_at: Set(chrono::Utc::now()),
                ..Default::default()
            };
            model.insert(db).await.map_err(AppError::from)?;
            tracing::info!(studio = fixture.name, "Seeded studio");
        }
        Some(model) => {
            // Re-align catalog fields that drifted from the fixture
            let drifted = model.hourly_rate != fixture.hourly_rate
                || model.max_capacity != fixture.max_capacity
                || model.description.as_deref() != Some(fixture.description)
                || model.location.as_deref() != Some(fixture.location);

            if drifted {
                let mut active: studio::ActiveModel = model.into();
                active.description = Set(Some(fixture.description.to_string()));
                active.hourly_rate = Set(fixture.hourly_rate);
                active.max_capacity = Set(fixture.max_capacity);
                active.location = Set(Some(fixture.location.to_string()));
                active.update(db).await.map_err(AppError::from)?;
                tracing::info!(studio = fixture.name, "Updated seeded studio");
            }
        }
    }

    Ok(())
}

async fn ensure_user(
    db: &DatabaseConnection,
    email: &str,
    first_name: &str,
    last_name: &str,
    role: UserRole,
) -> AppResult<()> {
    let now = chrono::Utc::now();
    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(AppError::from)?;

    match existing {
        None => {
            let model = user::ActiveModel {
                email: Set(email.to_string()),
                password_hash: Set(Password::new(SEED_PASSWORD)?.into_string()),
                first_name: Set(Some(first_name.to_string())),
                last_name: Set(Some(last_name.to_string())),
                role: Set(role.to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            model.insert(db).await.map_err(AppError::from)?;
            tracing::info!(email, role = %role, "Seeded account");
        }
        Some(model) => {
            let password_ok = Password::from_hash(model.password_hash.clone()).verify(SEED_PASSWORD);
            let drifted = model.role != role.to_string()
                || model.first_name.as_deref() != Some(first_name)
                || model.last_name.as_deref() != Some(last_name)
                || !password_ok;

            if drifted {
                let mut active: user::ActiveModel = model.into();
                active.first_name = Set(Some(first_name.to_string()));
                active.last_name = Set(Some(last_name.to_string()));
                active.role = Set(role.to_string());
                if !password_ok {
                    active.password_hash = Set(Password::new(SEED_PASSWORD)?.into_string());
                }
                active.updated_at = Set(now);
                active.update(db).await.map_err(AppError::from)?;
                tracing::info!(email, "Updated seeded account");
            }
        }
    }

    Ok(())
}
