//! Client-name and date-range filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{Sale, SaleStatus};

/// Criteria for narrowing a sales history.
///
/// The same value drives both the in-memory filter and the store query, so
/// the two agree on semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesFilter {
    /// Case-insensitive substring of the client name; empty matches all.
    #[serde(default)]
    pub client_query: String,
    /// Inclusive lower bound.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub end_date: Option<NaiveDate>,
    /// Only sales in this state.
    pub status: Option<SaleStatus>,
}

impl SalesFilter {
    /// Filter that only looks at the client name.
    #[must_use]
    pub fn by_client(query: impl Into<String>) -> Self {
        Self {
            client_query: query.into(),
            ..Self::default()
        }
    }

    /// Restricts to `[start, end]`; either bound may be open.
    #[must_use]
    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Restricts to one status.
    #[must_use]
    pub fn with_status(mut self, status: SaleStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.client_query.is_empty()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.status.is_none()
    }

    /// Lower-cased query, the form both filter paths compare against.
    #[must_use]
    pub fn normalized_query(&self) -> String {
        client_search_key(&self.client_query)
    }

    /// Whether one sale passes every criterion.
    #[must_use]
    pub fn matches(&self, sale: &Sale) -> bool {
        self.matches_with(sale, &self.normalized_query())
    }

    /// Returns matching sales, newest first; ties keep input order.
    #[must_use]
    pub fn apply(&self, sales: &[Sale]) -> Vec<Sale> {
        let query = self.normalized_query();
        let mut out: Vec<Sale> = sales
            .iter()
            .filter(|s| self.matches_with(s, &query))
            .cloned()
            .collect();

        out.sort_by(|a, b| b.date.cmp(&a.date));
        out
    }

    fn matches_with(&self, sale: &Sale, query: &str) -> bool {
        (query.is_empty() || client_search_key(&sale.client_name).contains(query))
            && self.start_date.is_none_or(|start| sale.date >= start)
            && self.end_date.is_none_or(|end| sale.date <= end)
            && self.status.is_none_or(|status| sale.status == status)
    }
}

/// Case-folded client name used for substring search.
///
/// The store persists this key next to the name, so matching never depends
/// on the database collation.
#[must_use]
pub fn client_search_key(name: &str) -> String {
    name.to_lowercase()
}

/// Filters `sales` by client substring and inclusive date bounds, newest first.
#[must_use]
pub fn filter(
    sales: &[Sale],
    client_query: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Vec<Sale> {
    SalesFilter::by_client(client_query)
        .between(start_date, end_date)
        .apply(sales)
}
