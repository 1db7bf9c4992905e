//! Database migration runner for Salesbook.
//!
//! Usage:
//!   migrator up      - Create the `sale_status` enum, `users`, and `sales`
//!   migrator down    - Drop them again
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations
//!
//! The connection string comes from `DATABASE_URL` (a `.env` file is honoured).

use sea_orm_migration::prelude::*;
use salesbook_db::migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Run the migrator CLI (it sets up its own tracing)
    cli::run_cli(Migrator).await;
}
