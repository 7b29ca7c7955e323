//! Display formatting for the bills list.
//!
//! Formatting is total: a record whose date cannot be parsed keeps its raw value so a single
//! bad row never hides the rest of the list.

use crate::core::bill::{Bill, BillStatus};
use chrono::{Datelike, NaiveDate};
use std::cmp::Reverse;
use tracing::warn;

const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Result of formatting a stored date for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayDate {
    /// Date parsed and rendered as `<day> <Mon>. <yy>`
    Formatted(String),
    /// Unparsable input, passed through untouched
    Raw(String),
}

impl DisplayDate {
    /// Text to render in the list.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Formatted(s) | Self::Raw(s) => s,
        }
    }

    /// Whether the stored value had to be passed through.
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

/// Bill prepared for the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct BillSummary {
    /// The bill as returned by the store
    pub bill: Bill,
    /// Date as it should be displayed
    pub display_date: DisplayDate,
}

impl BillSummary {
    /// Status label for the list view.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        format_status(self.bill.status)
    }
}

/// Parses a stored `YYYY-MM-DD` date, tolerating surrounding whitespace and unpadded
/// month/day numbers.
#[must_use]
pub fn parse_bill_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Key the list is ordered on: the canonical `YYYY-MM-DD` form of parsable dates, the
/// trimmed raw value otherwise.
#[must_use]
pub fn date_key(raw: &str) -> String {
    parse_bill_date(raw).map_or_else(
        || raw.trim().to_string(),
        |date| date.format("%Y-%m-%d").to_string(),
    )
}

/// Formats an ISO `YYYY-MM-DD` date as e.g. `4 Avr. 04`.
#[must_use]
pub fn format_date(raw: &str) -> DisplayDate {
    match parse_bill_date(raw) {
        Some(date) => {
            let month = MONTHS[date.month0() as usize];
            DisplayDate::Formatted(format!(
                "{} {}. {:02}",
                date.day(),
                month,
                date.year().rem_euclid(100)
            ))
        }
        None => {
            warn!(date = raw, "Unparsable bill date, keeping raw value");
            DisplayDate::Raw(raw.to_string())
        }
    }
}

/// Human-readable status label.
#[must_use]
pub const fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refused",
    }
}

/// Prepares store records for display: drops dateless records, formats dates and sorts
/// newest first. Equal dates keep their fetch order.
#[must_use]
pub fn format_bills(bills: Vec<Bill>) -> Vec<BillSummary> {
    let mut dated: Vec<Bill> = bills
        .into_iter()
        .filter(|bill| {
            let has_date = !bill.date.trim().is_empty();
            if !has_date {
                warn!(bill_id = %bill.id, "Skipping bill without a date");
            }
            has_date
        })
        .collect();

    // stable, so equal dates keep their fetch order
    dated.sort_by_cached_key(|bill| Reverse(date_key(&bill.date)));

    dated
        .into_iter()
        .map(|bill| BillSummary {
            display_date: format_date(&bill.date),
            bill,
        })
        .collect()
}
