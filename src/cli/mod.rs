//! CLI module - Command-line interface for Stockpile

use clap::{Parser, Subcommand};

use crate::domain::Role;

/// Stockpile - inventory tracking API server
#[derive(Parser)]
#[command(name = "stockpile")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server (default)
    #[command(alias = "web")]
    Serve {
        /// Override server.port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Manage user accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a new account
    Add {
        /// Login name
        username: String,
        /// Password (at least 8 characters)
        #[arg(long)]
        password: String,
        /// Account role
        #[arg(long, default_value = "viewer")]
        role: Role,
    },
}
