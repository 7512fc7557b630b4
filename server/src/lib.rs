//! `diceware-site` — HTTP front end for `diceware-core`.
//!
//! Serves an HTML page and a JSON endpoint that generate passphrases,
//! plus a handful of embedded static files.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod assets;
pub mod config;
pub mod error;
pub mod handlers;
pub mod params;
pub mod render;
pub mod server;
pub mod state;
pub mod timing;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use server::{router, serve};
pub use state::AppState;

/// Short commit hash the binary was built from.
pub const BUILD: &str = env!("DICEWARE_BUILD_HASH");
