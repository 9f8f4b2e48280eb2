use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::password::{ForgotPasswordUseCase, ResetPasswordInput, ResetPasswordUseCase};

// ── POST /forgot-password ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

pub async fn forgot_password(
    State(state): State<AppState>,
    Json(body): Json<ForgotPasswordRequest>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = ForgotPasswordUseCase {
        accounts: state.account_repo(),
        otps: state.otp_repo(),
        mailer: state.mailer(),
    };
    usecase.execute(&body.email).await?;
    Ok(StatusCode::OK)
}

// ── POST /reset-password ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = ResetPasswordUseCase {
        accounts: state.account_repo(),
        otps: state.otp_repo(),
    };
    usecase
        .execute(ResetPasswordInput {
            email: body.email,
            code: body.code,
            new_password: body.new_password,
            confirm_password: body.confirm_password,
        })
        .await?;
    Ok(StatusCode::OK)
}
