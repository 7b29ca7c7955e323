//! Bill entity - one submitted expense bill and its receipt.
//!
//! `expense_type` and `status` hold the same strings the domain types serialise to;
//! the receipt bytes are kept alongside the row.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bill database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bills")]
pub struct Model {
    /// Unique identifier for the bill
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Email of the employee who submitted the bill
    pub email: String,
    /// Expense category label (e.g. `"Transports"`)
    pub expense_type: String,
    /// Free-text label
    pub name: String,
    /// Amount in currency units
    pub amount: Option<f64>,
    /// Date as submitted, expected `YYYY-MM-DD`
    pub date: String,
    /// VAT amount
    pub vat: Option<f64>,
    /// VAT percentage
    pub pct: Option<i32>,
    /// Free-text commentary
    pub commentary: Option<String>,
    /// Original receipt file name
    pub file_name: Option<String>,
    /// URL the receipt is served from
    pub file_url: Option<String>,
    /// Receipt content
    pub receipt: Option<Vec<u8>>,
    /// `"pending"`, `"accepted"` or `"refused"`
    pub status: String,
}

/// Bills have no relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
