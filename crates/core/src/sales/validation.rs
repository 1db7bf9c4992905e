//! Input validation for sale payloads.
//!
//! Payloads arrive as loosely typed drafts so that a missing or mistyped
//! field is reported per field instead of as a body parse failure.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salesbook_shared::FieldError;
use salesbook_shared::types::{SaleId, UserId};
use serde::Deserialize;

use super::types::{Sale, SaleStatus, paid_at_for};

/// Longest client name or item, in characters.
pub const MAX_TEXT_LEN: usize = 255;

/// Most decimal places a value may carry.
pub const MAX_VALUE_SCALE: u32 = 2;

/// Exclusive upper bound on a sale value (`NUMERIC(12, 2)`).
pub const VALUE_LIMIT: Decimal = Decimal::from_parts(0x540B_E400, 0x2, 0, false, 0);

/// Raw create-sale payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDraft {
    /// Client name.
    pub client_name: Option<String>,
    /// Item sold.
    pub item_sold: Option<String>,
    /// Amount, as a JSON number or numeric string.
    pub value: Option<Decimal>,
    /// Day of the sale, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// `pending` (default) or `paid`.
    pub status: Option<String>,
}

/// A create-sale payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    /// Client name.
    pub client_name: String,
    /// Item sold.
    pub item_sold: String,
    /// Strictly positive amount.
    pub value: Decimal,
    /// Day of the sale.
    pub date: NaiveDate,
    /// Initial status.
    pub status: SaleStatus,
}

impl SaleDraft {
    /// Checks every field and returns the typed sale input.
    ///
    /// # Errors
    ///
    /// Returns one `FieldError` per rejected field, in field order.
    pub fn validate(self) -> Result<NewSale, Vec<FieldError>> {
        let mut errors = Vec::new();

        let client_name = required_text(
            self.client_name,
            "clientName",
            "Nome do cliente é obrigatório",
            &mut errors,
        );
        let item_sold = required_text(
            self.item_sold,
            "itemSold",
            "Item vendido é obrigatório",
            &mut errors,
        );

        let value = match self.value {
            Some(v) if v <= Decimal::ZERO => {
                errors.push(FieldError::new("value", "Valor deve ser positivo"));
                None
            }
            Some(v) if v.normalize().scale() > MAX_VALUE_SCALE => {
                errors.push(FieldError::new(
                    "value",
                    "Valor deve ter no máximo 2 casas decimais",
                ));
                None
            }
            Some(v) if v >= VALUE_LIMIT => {
                errors.push(FieldError::new("value", "Valor excede o limite permitido"));
                None
            }
            Some(v) => Some(v),
            None => {
                errors.push(FieldError::new("value", "Valor é obrigatório"));
                None
            }
        };

        let date = match self.date.as_deref().map(parse_iso_date) {
            Some(Some(d)) => Some(d),
            Some(None) => {
                errors.push(FieldError::new("date", "Data deve estar no formato YYYY-MM-DD"));
                None
            }
            None => {
                errors.push(FieldError::new("date", "Data é obrigatória"));
                None
            }
        };

        let status = match self.status.as_deref() {
            None => Some(SaleStatus::Pending),
            Some(raw) => match raw.parse::<SaleStatus>() {
                Ok(s) => Some(s),
                Err(_) => {
                    errors.push(FieldError::new("status", "Status deve ser 'pending' ou 'paid'"));
                    None
                }
            },
        };

        match (client_name, item_sold, value, date, status) {
            (Some(client_name), Some(item_sold), Some(value), Some(date), Some(status))
                if errors.is_empty() =>
            {
                Ok(NewSale {
                    client_name,
                    item_sold,
                    value,
                    date,
                    status,
                })
            }
            _ => Err(errors),
        }
    }
}

impl NewSale {
    /// Builds the stored record for `owner`, stamping `paid_at` when created as paid.
    #[must_use]
    pub fn into_sale(self, owner_id: UserId, today: NaiveDate) -> Sale {
        Sale {
            id: SaleId::new(),
            owner_id,
            client_name: self.client_name,
            item_sold: self.item_sold,
            value: self.value,
            date: self.date,
            status: self.status,
            paid_at: paid_at_for(self.status, today),
        }
    }
}

/// Raw status-update payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusUpdate {
    /// Target status.
    pub status: Option<String>,
}

impl StatusUpdate {
    /// Returns the requested status.
    ///
    /// # Errors
    ///
    /// Returns a `status` field error when it is missing or unknown.
    pub fn validate(self) -> Result<SaleStatus, Vec<FieldError>> {
        self.status
            .as_deref()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                vec![FieldError::new(
                    "status",
                    "Status deve ser 'pending' ou 'paid'",
                )]
            })
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// Unpadded forms such as `2025-1-5` and impossible days such as
/// `2025-02-30` are rejected.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !shaped {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn required_text(
    value: Option<String>,
    field: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(v) if v.trim().is_empty() => {
            errors.push(FieldError::new(field, message));
            None
        }
        Some(v) if v.chars().count() > MAX_TEXT_LEN => {
            errors.push(FieldError::new(
                field,
                format!("Deve ter no máximo {MAX_TEXT_LEN} caracteres"),
            ));
            None
        }
        Some(v) => Some(v),
        None => {
            errors.push(FieldError::new(field, message));
            None
        }
    }
}
