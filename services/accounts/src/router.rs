use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use emporia_core::health::healthz;
use emporia_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    address::{create_address, list_addresses},
    health::readyz,
    password::{forgot_password, reset_password},
    profile::{get_profile, update_profile},
    session::{login, logout},
    signup::{register, resend_otp, verify_otp},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Registration
        .route("/register", post(register))
        .route("/verify-otp", post(verify_otp))
        .route("/resend-otp", post(resend_otp))
        // Session
        .route("/login", post(login))
        .route("/logout", post(logout))
        // Password recovery
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
        // Profile
        .route("/profile", get(get_profile))
        .route("/profile", patch(update_profile))
        // Addresses
        .route("/addresses", get(list_addresses))
        .route("/addresses", post(create_address))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
