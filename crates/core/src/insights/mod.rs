//! AI-generated financial advice over a seller's pending sales.
//!
//! Generation is best-effort: every failure path ends in a fixed message,
//! never an error, so callers can always answer the user.

mod gemini;
mod provider;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

pub use gemini::GeminiClient;
pub use provider::{InsightError, TextGenerator};

use crate::sales::{Sale, total_pending};

/// Reply when the seller has no sales at all.
pub const NO_SALES_MESSAGE: &str = "Você ainda não tem vendas registradas. Comece adicionando suas primeiras vendas para receber insights personalizados!";

/// Reply when no provider is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "Chave da API Gemini não configurada. Configure SALESBOOK__GEMINI__API_KEY no arquivo .env";

/// Reply when the provider call fails.
pub const FAILURE_MESSAGE: &str = "Erro ao gerar insights. Verifique sua conexão e chave da API.";

/// Reply when the provider answers with no text.
pub const EMPTY_MESSAGE: &str = "Não foi possível gerar insights.";

#[derive(Serialize)]
struct PendingLine<'a> {
    cliente: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    valor: Decimal,
    item: &'a str,
    data: NaiveDate,
}

/// Builds the advice prompt from the pending subset of `sales`.
#[must_use]
pub fn build_prompt(sales: &[Sale]) -> String {
    let pending: Vec<&Sale> = sales.iter().filter(|s| s.is_pending()).collect();
    let total = total_pending(sales)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let clients: HashSet<&str> = pending.iter().map(|s| s.client_name.as_str()).collect();

    let lines: Vec<PendingLine<'_>> = pending
        .iter()
        .map(|s| PendingLine {
            cliente: &s.client_name,
            valor: s.value,
            item: &s.item_sold,
            data: s.date,
        })
        .collect();
    let details = serde_json::to_string(&lines).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Analise os seguintes dados de vendas de um pequeno comerciante e forneça 3 conselhos rápidos e profissionais em português.\n\
         \n\
         Total de vendas em aberto: R$ {total:.2}\n\
         Número de clientes com dívidas: {}\n\
         Vendas pendentes detalhadas: {details}\n\
         \n\
         Por favor, retorne apenas os 3 conselhos em formato de tópicos curtos.",
        clients.len()
    )
}

/// Produces advice text, falling back to fixed messages.
#[derive(Clone, Default)]
pub struct InsightService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl std::fmt::Debug for InsightService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightService")
            .field("provider", &self.generator.as_ref().map(|g| g.name()))
            .finish()
    }
}

impl InsightService {
    /// Service backed by `generator`, or unconfigured when `None`.
    #[must_use]
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    /// Whether a provider is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Advice for the seller owning `sales`.
    pub async fn summarize(&self, sales: &[Sale]) -> String {
        if sales.is_empty() {
            return NO_SALES_MESSAGE.to_string();
        }

        let Some(generator) = &self.generator else {
            return NOT_CONFIGURED_MESSAGE.to_string();
        };

        match generator.generate(&build_prompt(sales)).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!(provider = generator.name(), "Provider returned no text");
                EMPTY_MESSAGE.to_string()
            }
            Err(e) => {
                tracing::error!(provider = generator.name(), error = %e, "Insight generation failed");
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}
