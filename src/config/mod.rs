//! Application configuration: database location, modal sizing, session and seed bills.

/// Seed bills loaded from config.toml
pub mod bills;

/// Database configuration and connection management
pub mod database;

/// Session user from environment variables
pub mod session;

use crate::{
    core::session::Session,
    errors::{Error, Result},
};
use std::{num::NonZeroU32, path::Path};
use tracing::{debug, info};

/// Width of the receipt preview modal when `BILLS_MODAL_WIDTH` is not set.
pub const DEFAULT_MODAL_WIDTH: u32 = 800;

/// Everything the binary needs to start.
#[derive(Debug)]
pub struct AppConfig {
    /// SeaORM connection string
    pub database_url: String,
    /// Receipt preview modal width in pixels
    pub modal_width: u32,
    /// Signed-in user
    pub session: Session,
    /// Bills to seed into an empty store
    pub seeds: Vec<bills::BillSeed>,
}

fn modal_width_from(raw: Option<&str>) -> Result<u32> {
    raw.map_or(Ok(DEFAULT_MODAL_WIDTH), |w| {
        w.trim()
            .parse::<NonZeroU32>()
            .map(NonZeroU32::get)
            .map_err(|e| Error::Config {
                message: format!("BILLS_MODAL_WIDTH must be a positive integer: {e}"),
            })
    })
}

/// Loads the configuration from the environment and, when present, `config_path`.
///
/// # Errors
/// Fails when the session variables are missing or invalid, the modal width is not a
/// number, or the config file exists but cannot be parsed.
pub fn load_app_configuration(config_path: &Path) -> Result<AppConfig> {
    let database_url = database::get_database_url();
    let modal_width = modal_width_from(std::env::var("BILLS_MODAL_WIDTH").ok().as_deref())?;
    let session = session::load_session()?;

    let seeds = if config_path.exists() {
        bills::load_config(config_path)?.bills
    } else {
        debug!(path = %config_path.display(), "No config file, nothing to seed");
        Vec::new()
    };

    info!(
        database_url = %database_url,
        modal_width,
        seeds = seeds.len(),
        "Loaded application configuration"
    );
    Ok(AppConfig {
        database_url,
        modal_width,
        session,
        seeds,
    })
}
