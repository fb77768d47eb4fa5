//! Policy set module

mod api;
mod commands;
mod models;

pub use commands::{run_ps_command, save_policy_set};
pub use models::{PolicySet, PolicySetAttributes, PolicySetSettings, VcsRepo};
