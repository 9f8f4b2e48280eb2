use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use emporia_auth_types::session::Session;

use crate::domain::types::Address;
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::address::{CreateAddressInput, CreateAddressUseCase, ListAddressesUseCase};

#[derive(Serialize)]
pub struct AddressResponse {
    pub id: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(serialize_with = "emporia_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Address> for AddressResponse {
    fn from(a: Address) -> Self {
        Self {
            id: a.id.to_string(),
            line1: a.line1,
            line2: a.line2,
            city: a.city,
            postal_code: a.postal_code,
            country: a.country,
            created_at: a.created_at,
        }
    }
}

// ── GET /addresses ───────────────────────────────────────────────────────────

pub async fn list_addresses(
    session: Session,
    State(state): State<AppState>,
) -> Result<Json<Vec<AddressResponse>>, AccountsServiceError> {
    let usecase = ListAddressesUseCase {
        addresses: state.address_repo(),
    };
    let addresses = usecase.execute(session.account_id).await?;
    Ok(Json(addresses.into_iter().map(Into::into).collect()))
}

// ── POST /addresses ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAddressRequest {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

pub async fn create_address(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<CreateAddressRequest>,
) -> Result<(StatusCode, Json<AddressResponse>), AccountsServiceError> {
    let usecase = CreateAddressUseCase {
        addresses: state.address_repo(),
    };
    let address = usecase
        .execute(
            session.account_id,
            CreateAddressInput {
                line1: body.line1,
                line2: body.line2,
                city: body.city,
                postal_code: body.postal_code,
                country: body.country,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(address.into())))
}
