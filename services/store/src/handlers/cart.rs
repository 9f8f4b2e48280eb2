use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporia_auth_types::session::Session;

use crate::error::StoreServiceError;
use crate::state::AppState;
use crate::usecase::cart::{
    AddCartItemInput, AddCartItemUseCase, CartView, GetCartUseCase, RemoveCartItemUseCase,
    UpdateCartItemUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CartItemResponse {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub variant_id: Option<String>,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

#[derive(Serialize)]
pub struct CartResponse {
    pub id: String,
    pub items: Vec<CartItemResponse>,
    pub total_items: i64,
    pub total_price_cents: i64,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        let total_items = view.total_items();
        let total_price_cents = view.total_price_cents();
        Self {
            id: view.cart.id.to_string(),
            items: view
                .items
                .into_iter()
                .map(|priced| CartItemResponse {
                    id: priced.item.id.to_string(),
                    product_id: priced.item.product_id.to_string(),
                    product_name: priced.product.name_en,
                    variant_id: priced.item.variant_id.map(|id| id.to_string()),
                    quantity: priced.item.quantity,
                    unit_price_cents: priced.unit_price_cents,
                    line_total_cents: priced.unit_price_cents
                        * i64::from(priced.item.quantity),
                })
                .collect(),
            total_items,
            total_price_cents,
        }
    }
}

// ── GET /cart ────────────────────────────────────────────────────────────────

pub async fn get_cart(
    session: Session,
    State(state): State<AppState>,
) -> Result<Json<CartResponse>, StoreServiceError> {
    let uc = GetCartUseCase {
        carts: state.cart_repo(),
        products: state.product_repo(),
    };
    let view = uc.execute(session.account_id).await?;
    Ok(Json(view.into()))
}

// ── POST /cart/items ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddCartItemRequest {
    pub product_id: Uuid,
    pub variant_id: Option<Uuid>,
    pub quantity: i32,
}

#[derive(Serialize)]
pub struct AddCartItemResponse {
    pub id: String,
    pub quantity: i32,
}

pub async fn add_cart_item(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<AddCartItemRequest>,
) -> Result<(StatusCode, Json<AddCartItemResponse>), StoreServiceError> {
    let uc = AddCartItemUseCase {
        carts: state.cart_repo(),
        products: state.product_repo(),
    };
    let item = uc
        .execute(
            session.account_id,
            AddCartItemInput {
                product_id: body.product_id,
                variant_id: body.variant_id,
                quantity: body.quantity,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AddCartItemResponse {
            id: item.id.to_string(),
            quantity: item.quantity,
        }),
    ))
}

// ── PATCH /cart/items/{id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

pub async fn update_cart_item(
    session: Session,
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(body): Json<UpdateCartItemRequest>,
) -> Result<StatusCode, StoreServiceError> {
    let uc = UpdateCartItemUseCase {
        carts: state.cart_repo(),
    };
    uc.execute(session.account_id, item_id, body.quantity)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /cart/items/{id} ──────────────────────────────────────────────────

pub async fn remove_cart_item(
    session: Session,
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> Result<StatusCode, StoreServiceError> {
    let uc = RemoveCartItemUseCase {
        carts: state.cart_repo(),
    };
    uc.execute(session.account_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
