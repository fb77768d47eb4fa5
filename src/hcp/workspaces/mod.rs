//! Workspace module

mod api;
mod commands;
mod models;

pub use commands::{run_ws_command, save_workspace};
pub use models::{Workspace, WorkspaceAttributes, WorkspaceSettings};
