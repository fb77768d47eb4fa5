//! Workspace variable module

mod api;
mod commands;
mod models;

pub use commands::{run_variable_command, save_variable};
pub use models::{Variable, VariableAttributes, VariableSettings};
