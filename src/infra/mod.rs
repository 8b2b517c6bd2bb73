//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - Unit of Work for transaction management
//! - Seed data for development environments

pub mod db;
pub mod repositories;
pub mod seed;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    BookingRepository, BookingStore, StudioRepository, StudioStore, UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, TransactionContext, UnitOfWork};
