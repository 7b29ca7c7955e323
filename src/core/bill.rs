//! Bill domain types shared by the controllers, the store seam and the views.
//!
//! A bill starts life as a [`NewBill`] draft assembled from the new-bill form and becomes a
//! [`Bill`] once the store has assigned it an id (and a receipt URL when a file was attached).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expense category chosen on the new-bill form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseType {
    /// Train, plane, taxi...
    #[serde(rename = "Transports")]
    Transport,
    /// Meals and drinks
    #[serde(rename = "Restaurants et bars")]
    Restaurants,
    /// Hotels and other lodging
    #[serde(rename = "Hôtel et logement")]
    Lodging,
    /// Subscriptions and online services
    #[serde(rename = "Services en ligne")]
    OnlineServices,
    /// Computers, phones and electronics
    #[serde(rename = "IT et électronique")]
    Electronics,
    /// Equipment and hardware
    #[serde(rename = "Equipement et matériel")]
    Equipment,
    /// Office supplies
    #[serde(rename = "Fournitures de bureau")]
    OfficeSupplies,
}

impl ExpenseType {
    /// Every category, in the order the form lists them.
    pub const ALL: [Self; 7] = [
        Self::Transport,
        Self::Restaurants,
        Self::Lodging,
        Self::OnlineServices,
        Self::Electronics,
        Self::Equipment,
        Self::OfficeSupplies,
    ];

    /// Label stored by the back office and displayed to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transports",
            Self::Restaurants => "Restaurants et bars",
            Self::Lodging => "Hôtel et logement",
            Self::OnlineServices => "Services en ligne",
            Self::Electronics => "IT et électronique",
            Self::Equipment => "Equipement et matériel",
            Self::OfficeSupplies => "Fournitures de bureau",
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s.trim())
            .ok_or_else(|| format!("unknown expense type '{s}'"))
    }
}

/// Approval status, owned by the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// Submitted, awaiting review
    #[default]
    Pending,
    /// Approved
    Accepted,
    /// Rejected
    Refused,
}

impl BillStatus {
    /// Wire/storage value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Refused => "refused",
        }
    }
}

impl FromStr for BillStatus {
    type Err = String;

    // Store data is not always normalised, so casing and padding are tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "refused" => Ok(Self::Refused),
            other => Err(format!("unknown bill status '{other}'")),
        }
    }
}

/// Receipt picked by the user: original file name plus its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFile {
    /// File name as chosen in the picker
    pub name: String,
    /// Raw file content
    pub content: Vec<u8>,
}

impl ReceiptFile {
    /// Builds a receipt from a name and content.
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Draft bill, not yet accepted by the store (no id, no receipt URL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBill {
    /// Owner, taken from the session
    pub email: String,
    /// Expense category
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    /// Free-text label
    pub name: String,
    /// Amount in currency units
    pub amount: Option<f64>,
    /// ISO `YYYY-MM-DD` date
    pub date: String,
    /// VAT amount
    pub vat: Option<f64>,
    /// VAT percentage
    pub pct: Option<u32>,
    /// Free-text commentary
    pub commentary: Option<String>,
    /// Name of the attached receipt
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    /// Always `pending` for a fresh draft
    pub status: BillStatus,
}

/// Bill as persisted and returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Opaque identifier assigned by the store
    pub id: String,
    /// Owner identifier
    pub email: String,
    /// Expense category
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    /// Free-text label
    pub name: String,
    /// Amount in currency units
    pub amount: Option<f64>,
    /// Date as stored; expected `YYYY-MM-DD` but not guaranteed
    pub date: String,
    /// VAT amount
    pub vat: Option<f64>,
    /// VAT percentage
    pub pct: Option<u32>,
    /// Free-text commentary
    pub commentary: Option<String>,
    /// Where the receipt can be fetched once stored
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    /// Original receipt file name
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    /// Approval status
    pub status: BillStatus,
}
