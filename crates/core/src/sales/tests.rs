//! Property and example tests for aggregation, filtering, and export.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salesbook_shared::types::{SaleId, UserId};

use super::*;

const CLIENTS: [&str; 5] = ["Ana", "ana", "Bruno", "João Silva", "Maria Santos"];

fn day(s: &str) -> NaiveDate {
    parse_iso_date(s).unwrap()
}

fn sale(client: &str, item: &str, value: Decimal, date: &str, status: SaleStatus) -> Sale {
    let date = day(date);
    Sale {
        id: SaleId::new(),
        owner_id: UserId::new(),
        client_name: client.to_string(),
        item_sold: item.to_string(),
        value,
        date,
        status,
        paid_at: (status == SaleStatus::Paid).then_some(date),
    }
}

fn sale_strategy() -> impl Strategy<Value = Sale> {
    (0..CLIENTS.len(), 1i64..10_000_000, 0u64..90, any::<bool>()).prop_map(
        |(client, cents, offset, paid)| {
            let date = day("2025-01-01") + Days::new(offset);
            let status = if paid {
                SaleStatus::Paid
            } else {
                SaleStatus::Pending
            };
            Sale {
                id: SaleId::new(),
                owner_id: UserId::new(),
                client_name: CLIENTS[client].to_string(),
                item_sold: format!("item-{offset}"),
                value: Decimal::new(cents, 2),
                date,
                status,
                paid_at: paid.then_some(date),
            }
        },
    )
}

fn example_sales() -> Vec<Sale> {
    vec![
        sale("A", "first", dec!(100), "2025-01-01", SaleStatus::Pending),
        sale("A", "second", dec!(50), "2025-01-02", SaleStatus::Pending),
        sale("B", "third", dec!(30), "2025-01-03", SaleStatus::Paid),
    ]
}

proptest! {
    /// One summary per distinct pending client name.
    #[test]
    fn prop_aggregate_has_one_entry_per_pending_client(
        sales in prop::collection::vec(sale_strategy(), 0..40),
    ) {
        let summaries = aggregate(&sales);

        let names: HashSet<&str> = summaries.iter().map(|s| s.client_name.as_str()).collect();
        prop_assert_eq!(names.len(), summaries.len());

        let pending: HashSet<&str> = sales
            .iter()
            .filter(|s| s.is_pending())
            .map(|s| s.client_name.as_str())
            .collect();
        prop_assert_eq!(pending, names);
    }

    /// Debts add up to the pending total exactly.
    #[test]
    fn prop_aggregate_preserves_pending_sum(
        sales in prop::collection::vec(sale_strategy(), 0..40),
    ) {
        let debt: Decimal = aggregate(&sales).iter().map(|s| s.total_debt).sum();
        prop_assert_eq!(debt, total_pending(&sales));
    }

    /// Filtering a filtered result changes nothing.
    #[test]
    fn prop_filter_is_idempotent(
        sales in prop::collection::vec(sale_strategy(), 0..40),
        query in prop::sample::select(vec!["", "a", "AN", "silva", "zzz"]),
        start in prop::option::of(0u64..90),
        end in prop::option::of(0u64..90),
    ) {
        let base = day("2025-01-01");
        let start = start.map(|d| base + Days::new(d));
        let end = end.map(|d| base + Days::new(d));

        let once = filter(&sales, query, start, end);
        let twice = filter(&once, query, start, end);
        prop_assert_eq!(once, twice);
    }

    /// Output is newest first and every row satisfies the criteria.
    #[test]
    fn prop_filter_output_sorted_and_matching(
        sales in prop::collection::vec(sale_strategy(), 0..40),
        query in prop::sample::select(vec!["", "a", "bru", "MARIA"]),
    ) {
        let criteria = SalesFilter::by_client(query);
        let out = criteria.apply(&sales);

        prop_assert!(out.windows(2).all(|w| w[0].date >= w[1].date));
        prop_assert!(out.iter().all(|s| criteria.matches(s)));
        prop_assert_eq!(out.len(), sales.iter().filter(|s| criteria.matches(s)).count());
    }

    /// CSV has a header plus one line per sale.
    #[test]
    fn prop_csv_line_count(sales in prop::collection::vec(sale_strategy(), 0..20)) {
        let csv = to_csv(&sales).unwrap();
        prop_assert_eq!(csv.lines().count(), sales.len() + 1);
        prop_assert!(!csv.ends_with('\n'));
    }
}

#[test]
fn test_aggregate_empty() {
    assert!(aggregate(&[]).is_empty());
}

#[test]
fn test_aggregate_example() {
    let summaries = aggregate(&example_sales());

    assert_eq!(
        summaries,
        vec![ClientSummary {
            client_name: "A".to_string(),
            total_debt: dec!(150),
            last_item: "first".to_string(),
        }]
    );
}

#[test]
fn test_aggregate_keeps_first_seen_order_and_exact_names() {
    let sales = vec![
        sale("Bruno", "b1", dec!(10), "2025-01-05", SaleStatus::Pending),
        sale("Ana", "a1", dec!(20), "2025-01-04", SaleStatus::Pending),
        sale("ana", "a2", dec!(5), "2025-01-03", SaleStatus::Pending),
        sale("Bruno", "b2", dec!(1.25), "2025-01-02", SaleStatus::Pending),
    ];

    let summaries = aggregate(&sales);
    let names: Vec<_> = summaries.iter().map(|s| s.client_name.as_str()).collect();

    assert_eq!(names, vec!["Bruno", "Ana", "ana"]);
    assert_eq!(summaries[0].total_debt, dec!(11.25));
    assert_eq!(summaries[0].last_item, "b1");
}

#[test]
fn test_aggregate_saturates_instead_of_overflowing() {
    let sales = vec![
        sale("A", "x", Decimal::MAX, "2025-01-02", SaleStatus::Pending),
        sale("A", "y", Decimal::MAX, "2025-01-01", SaleStatus::Pending),
        sale("B", "z", dec!(1), "2025-01-01", SaleStatus::Pending),
    ];

    let summaries = aggregate(&sales);
    assert_eq!(summaries[0].total_debt, Decimal::MAX);
    assert_eq!(summaries[1].total_debt, dec!(1));
    assert_eq!(total_pending(&sales), Decimal::MAX);
}

#[test]
fn test_filter_example() {
    let sales = example_sales();
    let out = filter(&sales, "a", Some(day("2025-01-01")), Some(day("2025-01-02")));

    let items: Vec<_> = out.iter().map(|s| s.item_sold.as_str()).collect();
    assert_eq!(items, vec!["second", "first"]);
}

#[test]
fn test_filter_empty_query_and_open_bounds_match_all() {
    let sales = example_sales();
    let out = filter(&sales, "", None, None);

    let dates: Vec<_> = out.iter().map(|s| s.date.to_string()).collect();
    assert_eq!(dates, vec!["2025-01-03", "2025-01-02", "2025-01-01"]);
}

#[test]
fn test_filter_is_stable_on_equal_dates() {
    let sales = vec![
        sale("Ana", "x", dec!(1), "2025-03-01", SaleStatus::Pending),
        sale("Ana", "y", dec!(1), "2025-03-01", SaleStatus::Pending),
        sale("Ana", "z", dec!(1), "2025-02-01", SaleStatus::Pending),
    ];

    let items: Vec<_> = filter(&sales, "ANA", None, None)
        .into_iter()
        .map(|s| s.item_sold)
        .collect();
    assert_eq!(items, vec!["x", "y", "z"]);
}

#[test]
fn test_filter_folds_accented_names() {
    let sales = vec![
        sale("ÁLVARO Souza", "x", dec!(1), "2025-03-01", SaleStatus::Pending),
        sale("Alvaro", "y", dec!(1), "2025-03-01", SaleStatus::Pending),
    ];

    let items: Vec<_> = filter(&sales, "álvaro", None, None)
        .into_iter()
        .map(|s| s.item_sold)
        .collect();
    assert_eq!(items, vec!["x"]);
    assert_eq!(client_search_key("ÁLVARO"), "álvaro");
}

#[test]
fn test_filter_by_status() {
    let out = SalesFilter::default()
        .with_status(SaleStatus::Paid)
        .apply(&example_sales());

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].client_name, "B");
}

#[test]
fn test_csv_empty_is_header_only() {
    assert_eq!(to_csv(&[]).unwrap(), CSV_HEADER);
}

#[test]
fn test_csv_rows() {
    let sales = vec![
        sale("João Silva", "Notebook Dell", dec!(2500), "2025-12-01", SaleStatus::Paid),
        sale("Maria Santos", "Mouse Logitech", dec!(150.5), "2025-12-05", SaleStatus::Pending),
    ];

    let expected = "Data,Cliente,Item,Valor,Status,Data Pagamento\n\
                    2025-12-01,João Silva,Notebook Dell,2500.00,Pago,2025-12-01\n\
                    2025-12-05,Maria Santos,Mouse Logitech,150.50,Pendente,-";
    assert_eq!(to_csv(&sales).unwrap(), expected);
}

#[test]
fn test_csv_does_not_quote_commas() {
    let sales = vec![sale("Silva, João", "Caneta", dec!(2), "2025-12-01", SaleStatus::Pending)];

    let csv = to_csv(&sales).unwrap();
    assert!(csv.ends_with("2025-12-01,Silva, João,Caneta,2.00,Pendente,-"));
}

#[test]
fn test_json_export_is_verbatim() {
    let sales = example_sales();
    let json = to_json(&sales).unwrap();

    let parsed: Vec<Sale> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, sales);
    assert!(json.contains("\"clientName\": \"A\""));
}

#[test]
fn test_view_summaries_use_most_recent_item() {
    let view = SalesView::new(vec![
        sale("Ana", "older", dec!(10), "2025-01-01", SaleStatus::Pending),
        sale("Ana", "newer", dec!(5), "2025-02-01", SaleStatus::Pending),
    ]);

    let summaries = view.client_summaries();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].last_item, "newer");
    assert_eq!(summaries[0].total_debt, dec!(15));
    assert_eq!(view.total_pending(), dec!(15));
}

#[test]
fn test_view_history_follows_filter() {
    let mut view = SalesView::new(example_sales());

    view.set_client_query("b");
    assert_eq!(view.history().len(), 1);

    view.set_client_query("");
    view.set_date_range(Some(day("2025-01-02")), None);
    assert_eq!(view.history().len(), 2);

    view.clear_filter();
    assert_eq!(view.history().len(), 3);

    view.replace_sales(Vec::new());
    assert!(view.history().is_empty());
    assert!(view.client_summaries().is_empty());
}
