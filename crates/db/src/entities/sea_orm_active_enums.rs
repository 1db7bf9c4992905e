//! `SeaORM` mappings for Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use salesbook_core::sales::SaleStatus as DomainStatus;

/// `sale_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "sale_status")]
pub enum SaleStatus {
    /// Still owed.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Settled.
    #[sea_orm(string_value = "paid")]
    Paid,
}

impl From<DomainStatus> for SaleStatus {
    fn from(status: DomainStatus) -> Self {
        match status {
            DomainStatus::Pending => Self::Pending,
            DomainStatus::Paid => Self::Paid,
        }
    }
}

impl From<SaleStatus> for DomainStatus {
    fn from(status: SaleStatus) -> Self {
        match status {
            SaleStatus::Pending => Self::Pending,
            SaleStatus::Paid => Self::Paid,
        }
    }
}
