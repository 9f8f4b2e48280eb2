use sea_orm::Database;
use tracing::info;

use emporia_auth_types::session::JwtSecret;
use emporia_store::config::StoreConfig;
use emporia_store::router::build_router;
use emporia_store::state::AppState;

#[tokio::main]
async fn main() {
    emporia_core::tracing::init_tracing();

    let config = StoreConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: JwtSecret(config.jwt_secret),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.store_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("store service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
