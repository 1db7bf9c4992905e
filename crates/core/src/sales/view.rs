//! Presentation state for a signed-in owner's sales.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::aggregate::{aggregate, total_pending};
use super::filter::SalesFilter;
use super::types::{ClientSummary, Sale};

/// The owner's loaded sales plus the active history filter.
///
/// Every query is answered from the current snapshot; replace the snapshot
/// after a mutation reloads it from the store.
#[derive(Debug, Clone, Default)]
pub struct SalesView {
    sales: Vec<Sale>,
    filter: SalesFilter,
}

impl SalesView {
    /// Wraps a freshly loaded snapshot with no filter.
    #[must_use]
    pub fn new(sales: Vec<Sale>) -> Self {
        Self {
            sales,
            filter: SalesFilter::default(),
        }
    }

    /// The unfiltered snapshot.
    #[must_use]
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Active history filter.
    #[must_use]
    pub const fn filter(&self) -> &SalesFilter {
        &self.filter
    }

    /// Swaps in a reloaded snapshot, keeping the filter.
    pub fn replace_sales(&mut self, sales: Vec<Sale>) {
        self.sales = sales;
    }

    /// Sets the client search text.
    pub fn set_client_query(&mut self, query: impl Into<String>) {
        self.filter.client_query = query.into();
    }

    /// Sets the inclusive date range.
    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.filter.start_date = start;
        self.filter.end_date = end;
    }

    /// Drops every criterion.
    pub fn clear_filter(&mut self) {
        self.filter = SalesFilter::default();
    }

    /// Filtered history, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<Sale> {
        self.filter.apply(&self.sales)
    }

    /// Debt per client over the whole snapshot, ignoring the history filter.
    ///
    /// Sorted newest first before grouping so `last_item` is the most recent
    /// pending item.
    #[must_use]
    pub fn client_summaries(&self) -> Vec<ClientSummary> {
        aggregate(&SalesFilter::default().apply(&self.sales))
    }

    /// Total still owed across all clients.
    #[must_use]
    pub fn total_pending(&self) -> Decimal {
        total_pending(&self.sales)
    }
}
