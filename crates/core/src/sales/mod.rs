//! Sale records and the pure computations over them.
//!
//! This module provides:
//! - `Sale` and `SaleStatus` domain types
//! - Input validation for new sales and status updates
//! - Per-client debt aggregation
//! - Client-name and date-range filtering
//! - CSV and JSON export
//! - `SalesView`, the presentation state that ties the above together
//!
//! Everything here is synchronous and works on a snapshot slice; nothing
//! touches the store.

mod aggregate;
mod export;
mod filter;
mod types;
mod validation;
mod view;

pub use aggregate::{aggregate, total_pending};
pub use export::{
    CSV_EXPORT_FILENAME, CSV_HEADER, ExportError, JSON_EXPORT_FILENAME, to_csv, to_json,
};
pub use filter::{SalesFilter, client_search_key, filter};
pub use types::{ClientSummary, ParseStatusError, Sale, SaleStatus};
pub use validation::{NewSale, SaleDraft, StatusUpdate, parse_iso_date};
pub use view::SalesView;

#[cfg(test)]
mod tests;
