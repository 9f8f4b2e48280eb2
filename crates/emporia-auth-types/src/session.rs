//! Session extractor backed by the access-token cookie.

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::extract::cookie::CookieJar;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::cookie::EMPORIA_ACCESS_TOKEN;
use crate::token::validate_access_token;

/// JWT signing secret, provided to the extractor through `FromRef` on the
/// service's `AppState`.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// Authenticated session extracted from the `emporia_access_token` cookie.
///
/// Returns 401 if the cookie is absent, expired, or fails validation.
/// Partner enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct Session {
    pub account_id: Uuid,
    pub is_partner: bool,
    pub access_token_exp: u64,
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let token = CookieJar::from_headers(&parts.headers)
            .get(EMPORIA_ACCESS_TOKEN)
            .map(|c| c.value().to_owned());

        async move {
            let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
            let info = validate_access_token(&token, &secret.0)
                .map_err(|_| StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                account_id: info.account_id,
                is_partner: info.is_partner,
                access_token_exp: info.access_token_exp,
            })
        }
    }
}
