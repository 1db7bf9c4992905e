//! CSV statement and JSON backup export.
//!
//! The CSV is written without quoting: a comma or newline inside a client
//! name or item shifts that row's columns. Consumers of the statement rely on
//! the exact unquoted layout.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use super::types::Sale;

/// Header row of the CSV statement.
pub const CSV_HEADER: &str = "Data,Cliente,Item,Valor,Status,Data Pagamento";

/// Download name of the CSV statement.
pub const CSV_EXPORT_FILENAME: &str = "extrato_vendas.csv";

/// Download name of the JSON backup.
pub const JSON_EXPORT_FILENAME: &str = "meu_controle_vendas_backup.json";

/// Export failures. Writing to memory only fails on encoder bugs.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV writer failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Output was not valid UTF-8.
    #[error("CSV export produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// JSON serialization failed.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders the CSV statement, one row per sale in input order.
///
/// Rows are separated by `\n` with no trailing newline.
pub fn to_csv(sales: &[Sale]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER.split(','))?;
    for sale in sales {
        writer.write_record([
            sale.date.to_string(),
            sale.client_name.clone(),
            sale.item_sold.clone(),
            format_value(sale.value),
            sale.status.label().to_string(),
            sale
                .paid_at
                .map_or_else(|| "-".to_string(), |d| d.to_string()),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }

    Ok(text)
}

/// Renders the sales verbatim as a pretty-printed JSON array.
pub fn to_json(sales: &[Sale]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(sales)?)
}

fn format_value(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
