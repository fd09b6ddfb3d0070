//! Schema CLI: `cargo run -p migration -- up|down|status|fresh`.
//!
//! Reads `DATABASE_URL` (or `-u`) the same way the service does.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
