//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing and subcommand handlers.

mod args;
mod commands;

pub use args::{Args, Command, ConfigAction, UsersAction};
pub use commands::{
    format_data, format_user, handle_config_action, handle_data, handle_users_action,
};
