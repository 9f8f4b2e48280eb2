use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use emporia_auth_types::session::Session;

use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::profile::{GetProfileUseCase, UpdateProfileInput, UpdateProfileUseCase};

// ── GET /profile ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub is_active: bool,
    pub is_partner: bool,
    #[serde(serialize_with = "emporia_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_profile(
    session: Session,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, AccountsServiceError> {
    let usecase = GetProfileUseCase {
        accounts: state.account_repo(),
    };
    let account = usecase.execute(session.account_id).await?;
    Ok(Json(ProfileResponse {
        id: account.id.to_string(),
        email: account.email,
        full_name: account.full_name,
        date_of_birth: account.date_of_birth,
        is_active: account.is_active,
        is_partner: account.is_partner,
        created_at: account.created_at,
    }))
}

// ── PATCH /profile ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

pub async fn update_profile(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = UpdateProfileUseCase {
        accounts: state.account_repo(),
    };
    usecase
        .execute(
            session.account_id,
            UpdateProfileInput {
                full_name: body.full_name,
                date_of_birth: body.date_of_birth,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
