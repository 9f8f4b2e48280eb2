use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use emporia_auth_types::cookie::{clear_session_cookie, set_access_token_cookie};

use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::login::{LoginInput, LoginUseCase, issue_access_token};

const X_EMPORIA_ACCESS_TOKEN_EXPIRES: &str = "x-emporia-access-token-expires";

fn token_expires_header(exp: u64) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(X_EMPORIA_ACCESS_TOKEN_EXPIRES),
        HeaderValue::from_str(&exp.to_string()).unwrap(),
    )
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub id: String,
    pub email: String,
    pub is_partner: bool,
    pub access_token_exp: u64,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, AccountsServiceError> {
    let usecase = LoginUseCase {
        accounts: state.account_repo(),
    };
    let account = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    let (token, exp) = issue_access_token(&account, &state.jwt_secret.0)?;
    let jar = set_access_token_cookie(jar, token, state.cookie_domain.clone());

    let mut headers = HeaderMap::new();
    let (name, value) = token_expires_header(exp);
    headers.insert(name, value);

    let body = LoginResponse {
        id: account.id.to_string(),
        email: account.email,
        is_partner: account.is_partner,
        access_token_exp: exp,
    };

    Ok((StatusCode::OK, jar, headers, Json(body)))
}

// ── POST /logout ─────────────────────────────────────────────────────────────

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AccountsServiceError> {
    let jar = clear_session_cookie(jar, state.cookie_domain.clone());
    Ok((StatusCode::NO_CONTENT, jar))
}
