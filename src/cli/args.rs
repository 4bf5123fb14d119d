//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal review carousel with drag-to-swipe and auto-advance
#[derive(Parser, Debug)]
#[command(name = "reviews-carousel")]
#[command(version, about = "Testimonial carousel for the terminal", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Auto-advance period in milliseconds (overrides config)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Hide status bar
    #[arg(long)]
    pub no_status: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Registered users on the demo service
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Fetch the demo data summary
    Data,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[derive(Subcommand, Debug, Clone)]
pub enum UsersAction {
    /// List registered users
    List,
    /// Register a new user
    Add {
        /// Full name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Age (optional)
        #[arg(long)]
        age: Option<u32>,
    },
}
