use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::signup::{
    ActivateAccountUseCase, RegisterInput, RegisterUseCase, ResendOtpUseCase,
};

// ── POST /register ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub password: String,
    #[serde(default)]
    pub is_partner: bool,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub id: String,
    pub email: String,
    pub message: &'static str,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AccountsServiceError> {
    let usecase = RegisterUseCase {
        accounts: state.account_repo(),
        otps: state.otp_repo(),
        mailer: state.mailer(),
    };
    let account = usecase
        .execute(RegisterInput {
            email: body.email,
            full_name: body.full_name,
            date_of_birth: body.date_of_birth,
            password: body.password,
            is_partner: body.is_partner,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: account.id.to_string(),
            email: account.email,
            message: "check your email for the verification code",
        }),
    ))
}

// ── POST /verify-otp ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct VerifyOtpResponse {
    pub id: String,
    pub email: String,
    pub is_active: bool,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, AccountsServiceError> {
    let usecase = ActivateAccountUseCase {
        accounts: state.account_repo(),
        otps: state.otp_repo(),
    };
    let account = usecase.execute(&body.email, &body.code).await?;
    Ok(Json(VerifyOtpResponse {
        id: account.id.to_string(),
        email: account.email,
        is_active: account.is_active,
    }))
}

// ── POST /resend-otp ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct ResendOtpResponse {
    pub created: bool,
}

pub async fn resend_otp(
    State(state): State<AppState>,
    Json(body): Json<ResendOtpRequest>,
) -> Result<Json<ResendOtpResponse>, AccountsServiceError> {
    let usecase = ResendOtpUseCase {
        accounts: state.account_repo(),
        otps: state.otp_repo(),
        mailer: state.mailer(),
    };
    let created = usecase.execute(&body.email).await?;
    Ok(Json(ResendOtpResponse { created }))
}
