use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use emporia_core::health::healthz;
use emporia_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    cart::{add_cart_item, get_cart, remove_cart_item, update_cart_item},
    health::readyz,
    catalog::{
        create_brand, create_category, create_color, create_product, create_size,
        create_variant, get_brand, get_category, get_product, get_variant, list_brands,
        list_categories, list_colors, list_products, list_sizes, list_variants,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Brands
        .route("/brands", get(list_brands))
        .route("/brands", post(create_brand))
        .route("/brands/{id}", get(get_brand))
        // Categories
        .route("/categories", get(list_categories))
        .route("/categories", post(create_category))
        .route("/categories/{id}", get(get_category))
        // Colors
        .route("/colors", get(list_colors))
        .route("/colors", post(create_color))
        // Sizes
        .route("/sizes", get(list_sizes))
        .route("/sizes", post(create_size))
        // Products
        .route("/products", get(list_products))
        .route("/products", post(create_product))
        .route("/products/{id}", get(get_product))
        // Variants
        .route("/products/{id}/variants", get(list_variants))
        .route("/products/{id}/variants", post(create_variant))
        .route("/products/{id}/variants/{variant_id}", get(get_variant))
        // Cart
        .route("/cart", get(get_cart))
        .route("/cart/items", post(add_cart_item))
        .route("/cart/items/{id}", patch(update_cart_item))
        .route("/cart/items/{id}", delete(remove_cart_item))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
