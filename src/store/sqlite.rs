//! SQLite-backed bill store.
//!
//! Rows are listed in insertion order; receipts are stored with the row and exposed under
//! `/receipts/<id>/<file name>`.

use crate::{
    core::{
        bill::{Bill, BillStatus, NewBill, ReceiptFile},
        format::parse_bill_date,
        store::{BillStore, StoreError, StoreResult},
    },
    entities::{BillEntity, bill},
};
use async_trait::async_trait;
use sea_orm::{IntoActiveModel, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info};

/// [`BillStore`] over a SeaORM connection.
#[derive(Debug, Clone)]
pub struct SqliteBillStore {
    db: DatabaseConnection,
}

impl SqliteBillStore {
    /// Wraps an open connection whose tables already exist.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Public URL of a stored receipt.
#[must_use]
pub fn receipt_url(id: i64, file_name: &str) -> String {
    format!("/receipts/{id}/{file_name}")
}

fn corrupt(id: i64, what: impl std::fmt::Display) -> StoreError {
    StoreError::Corrupt {
        message: format!("bill {id}: {what}"),
    }
}

fn to_bill(model: bill::Model) -> StoreResult<Bill> {
    let id = model.id;
    Ok(Bill {
        id: id.to_string(),
        email: model.email,
        expense_type: model.expense_type.parse().map_err(|e| corrupt(id, e))?,
        name: model.name,
        amount: model.amount,
        date: model.date,
        vat: model.vat,
        pct: model
            .pct
            .map(u32::try_from)
            .transpose()
            .map_err(|e| corrupt(id, e))?,
        commentary: model.commentary,
        file_url: model.file_url,
        file_name: model.file_name,
        status: model.status.parse().map_err(|e| corrupt(id, e))?,
    })
}

fn pct_column(pct: Option<u32>) -> StoreResult<Option<i32>> {
    pct.map(i32::try_from)
        .transpose()
        .map_err(|e| StoreError::Corrupt {
            message: format!("VAT percentage out of range: {e}"),
        })
}

/// Canonical `YYYY-MM-DD` form of a draft date; rows without one would never be listed.
fn checked_date(raw: &str) -> StoreResult<String> {
    parse_bill_date(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| StoreError::InvalidDate {
            date: raw.to_string(),
        })
}

fn parse_id(id: &str) -> StoreResult<i64> {
    id.parse().map_err(|_| StoreError::NotFound { id: id.to_string() })
}

#[async_trait]
impl BillStore for SqliteBillStore {
    async fn list(&self) -> StoreResult<Vec<Bill>> {
        let models = BillEntity::find()
            .order_by_asc(bill::Column::Id)
            .all(&self.db)
            .await?;
        debug!(count = models.len(), "Loaded bills from database");
        models.into_iter().map(to_bill).collect()
    }

    async fn create(&self, draft: NewBill, receipt: Option<ReceiptFile>) -> StoreResult<Bill> {
        let date = checked_date(&draft.date)?;
        let txn = self.db.begin().await?;

        let file_name = receipt
            .as_ref()
            .map(|r| r.name.clone())
            .or(draft.file_name);
        let model = bill::ActiveModel {
            email: Set(draft.email),
            expense_type: Set(draft.expense_type.label().to_string()),
            name: Set(draft.name),
            amount: Set(draft.amount),
            date: Set(date),
            vat: Set(draft.vat),
            pct: Set(pct_column(draft.pct)?),
            commentary: Set(draft.commentary),
            file_name: Set(file_name),
            file_url: Set(None),
            receipt: Set(receipt.map(|r| r.content)),
            status: Set(BillStatus::Pending.as_str().to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        // The URL embeds the id, so it can only be set once the row exists.
        let model = match model.file_name.clone() {
            Some(name) if model.receipt.is_some() => {
                let url = receipt_url(model.id, &name);
                let mut active = model.into_active_model();
                active.file_url = Set(Some(url));
                active.update(&txn).await?
            }
            _ => model,
        };

        txn.commit().await?;
        info!(bill_id = model.id, "Stored new bill");
        to_bill(model)
    }

    async fn update(&self, id: &str, bill: NewBill) -> StoreResult<Bill> {
        let key = parse_id(id)?;
        let date = checked_date(&bill.date)?;
        let existing = BillEntity::find_by_id(key)
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        let mut active = existing.into_active_model();
        active.expense_type = Set(bill.expense_type.label().to_string());
        active.name = Set(bill.name);
        active.amount = Set(bill.amount);
        active.date = Set(date);
        active.vat = Set(bill.vat);
        active.pct = Set(pct_column(bill.pct)?);
        active.commentary = Set(bill.commentary);
        if bill.file_name.is_some() {
            active.file_name = Set(bill.file_name);
        }

        let model = active.update(&self.db).await?;
        debug!(bill_id = model.id, "Updated bill");
        to_bill(model)
    }
}
