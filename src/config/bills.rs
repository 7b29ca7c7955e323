//! Seed bills loaded from config.toml
//!
//! The bills listed in config.toml are submitted for the session user when the store is
//! still empty, so a fresh installation has something to show.

use crate::{
    core::{
        bill::{BillStatus, ExpenseType, NewBill},
        session::Session,
        store::BillStore,
    },
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Bills to seed
    #[serde(default)]
    pub bills: Vec<BillSeed>,
}

/// A single seed bill
#[derive(Debug, Deserialize, Clone)]
pub struct BillSeed {
    /// Expense category label
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    /// Free-text label
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Amount in currency units
    pub amount: Option<f64>,
    /// VAT amount
    pub vat: Option<f64>,
    /// VAT percentage
    pub pct: Option<u32>,
    /// Free-text commentary
    pub commentary: Option<String>,
}

impl BillSeed {
    /// Draft owned by `email`.
    #[must_use]
    pub fn into_draft(self, email: &str) -> NewBill {
        NewBill {
            email: email.to_string(),
            expense_type: self.expense_type,
            name: self.name,
            amount: self.amount,
            date: self.date,
            vat: self.vat,
            pct: self.pct,
            commentary: self.commentary,
            file_name: None,
            status: BillStatus::Pending,
        }
    }
}

/// Loads seed bills from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML for [`Config`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Submits `seeds` for the session user if the store holds no bills yet.
/// Returns how many bills were created.
pub async fn seed_bills(
    store: &dyn BillStore,
    session: &Session,
    seeds: &[BillSeed],
) -> Result<usize> {
    if seeds.is_empty() || !store.list().await?.is_empty() {
        return Ok(0);
    }

    for seed in seeds {
        store
            .create(seed.clone().into_draft(&session.email), None)
            .await?;
    }

    info!(count = seeds.len(), "Seeded bills from configuration");
    Ok(seeds.len())
}
