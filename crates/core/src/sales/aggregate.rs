//! Per-client debt aggregation.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::types::{ClientSummary, Sale};

/// Groups pending sales by exact client name.
///
/// Groups come out in the order their client is first seen, and `last_item`
/// is the item of that first pending sale. Pass input sorted by date
/// descending to make `last_item` the most recent item.
///
/// Totals saturate at `Decimal::MAX` instead of overflowing.
#[must_use]
pub fn aggregate(sales: &[Sale]) -> Vec<ClientSummary> {
    let mut summaries: Vec<ClientSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for sale in sales.iter().filter(|s| s.is_pending()) {
        match index.get(sale.client_name.as_str()) {
            Some(&i) => {
                let summary = &mut summaries[i];
                summary.total_debt = summary.total_debt.saturating_add(sale.value);
            }
            None => {
                index.insert(&sale.client_name, summaries.len());
                summaries.push(ClientSummary {
                    client_name: sale.client_name.clone(),
                    total_debt: sale.value,
                    last_item: sale.item_sold.clone(),
                });
            }
        }
    }

    summaries
}

/// Sum of every pending value, saturating at `Decimal::MAX`.
#[must_use]
pub fn total_pending(sales: &[Sale]) -> Decimal {
    sales
        .iter()
        .filter(|s| s.is_pending())
        .fold(Decimal::ZERO, |acc, s| acc.saturating_add(s.value))
}
