//! Sale domain types.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salesbook_shared::types::{SaleId, UserId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payment state of a sale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    /// The client still owes the value.
    #[default]
    Pending,
    /// Settled.
    Paid,
}

impl SaleStatus {
    /// Wire/database spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }

    /// Label used in exported statements.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Paid => "Pago",
        }
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sale status '{0}', expected 'pending' or 'paid'")]
pub struct ParseStatusError(pub String);

impl FromStr for SaleStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// One sale made to a client by a store owner.
///
/// `value` is kept as `Decimal` so debt totals add up exactly; on the wire it
/// is a plain JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Record identifier.
    pub id: SaleId,
    /// Owner of the record. Every query is scoped by this.
    pub owner_id: UserId,
    /// Free-text client name; also the grouping key for debts.
    pub client_name: String,
    /// What was sold.
    pub item_sold: String,
    /// Amount, always positive.
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    /// Day of the sale.
    pub date: NaiveDate,
    /// Payment state.
    pub status: SaleStatus,
    /// Day it was marked paid; present exactly when `status` is `Paid`.
    pub paid_at: Option<NaiveDate>,
}

impl Sale {
    /// True while the client still owes this sale.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == SaleStatus::Pending
    }

    /// Moves the sale to `status`, stamping or clearing `paid_at`.
    ///
    /// Marking an already paid sale as paid again re-stamps it with `today`.
    pub fn set_status(&mut self, status: SaleStatus, today: NaiveDate) {
        self.status = status;
        self.paid_at = paid_at_for(status, today);
    }
}

/// `paid_at` value implied by a status change made on `today`.
#[must_use]
pub fn paid_at_for(status: SaleStatus, today: NaiveDate) -> Option<NaiveDate> {
    match status {
        SaleStatus::Paid => Some(today),
        SaleStatus::Pending => None,
    }
}

/// Outstanding debt of one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    /// Client name, exactly as recorded on the sales.
    pub client_name: String,
    /// Sum of the client's pending values.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_debt: Decimal,
    /// Item of the first pending sale seen for this client.
    pub last_item: String,
}
