//! Command-line interface definitions.

pub mod args;

pub use args::{Cli, Commands, MigrateAction, MigrateArgs, ServeArgs};
