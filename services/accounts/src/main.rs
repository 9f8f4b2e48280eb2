use sea_orm::Database;
use tracing::info;

use emporia_accounts::config::AccountsConfig;
use emporia_accounts::router::build_router;
use emporia_accounts::state::AppState;
use emporia_auth_types::session::JwtSecret;

#[tokio::main]
async fn main() {
    emporia_core::tracing::init_tracing();

    let config = AccountsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: JwtSecret(config.jwt_secret),
        cookie_domain: config.cookie_domain,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("accounts service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
