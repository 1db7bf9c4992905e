//! Database seeder for Salesbook development and demos.
//!
//! Creates the demo account and a handful of sales. Running it again is a
//! no-op once the demo account exists.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use salesbook_core::auth::hash_password;
use salesbook_core::sales::{NewSale, SaleStatus};
use salesbook_db::{SaleRepository, UserRepository};
use salesbook_shared::types::UserId;

/// Demo account email.
const DEMO_EMAIL: &str = "demo@exemplo.com";
/// Demo account password.
const DEMO_PASSWORD: &str = "123456";
/// Demo account display name.
const DEMO_NAME: &str = "Usuário Demo";

/// (client, item, value, date, status)
const DEMO_SALES: [(&str, &str, Decimal, &str, SaleStatus); 3] = [
    ("João Silva", "Notebook Dell", dec!(2500.00), "2025-12-01", SaleStatus::Paid),
    ("Maria Santos", "Mouse Logitech", dec!(150.00), "2025-12-05", SaleStatus::Pending),
    ("João Silva", "Teclado Mecânico", dec!(450.00), "2025-12-08", SaleStatus::Pending),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seeder=info,salesbook_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    info!("Connecting to database...");
    let db = salesbook_db::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let users = UserRepository::new(db.clone());
    if users.find_by_email(DEMO_EMAIL).await?.is_some() {
        info!(email = DEMO_EMAIL, "Demo user already exists, skipping");
        return Ok(());
    }

    let password_hash = hash_password(DEMO_PASSWORD)?;
    let user = users.create(DEMO_EMAIL, &password_hash, DEMO_NAME).await?;
    let owner = UserId::from_uuid(user.id);

    let sales = SaleRepository::new(db);
    let today = Utc::now().date_naive();
    for (client_name, item_sold, value, date, status) in DEMO_SALES {
        let sale = NewSale {
            client_name: client_name.to_string(),
            item_sold: item_sold.to_string(),
            value,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d")?,
            status,
        }
        .into_sale(owner, today);

        sales.insert(&sale).await?;
    }

    info!(
        email = DEMO_EMAIL,
        sales = DEMO_SALES.len(),
        "Seeding complete"
    );
    Ok(())
}
