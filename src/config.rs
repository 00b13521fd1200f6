//! Configuration loading
//!
//! Command-line arguments with environment variable fallbacks. Highest
//! priority is the CLI flag, then the environment variable, then the
//! compiled default.

use clap::Parser;
use std::path::PathBuf;

/// Auction fees data API
#[derive(Parser, Debug, Clone)]
#[command(name = "auction-fees", version)]
pub struct Config {
    /// Path to the SQLite database file (created on first run)
    #[arg(long, env = "AUCTION_FEES_DB", default_value = "auction_fees.db")]
    pub database: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(long, env = "AUCTION_FEES_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "AUCTION_FEES_PORT", default_value_t = 5750)]
    pub port: u16,
}

impl Config {
    /// Socket address string for the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
