use sea_orm_migration::prelude::*;

use emporia_accounts_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
