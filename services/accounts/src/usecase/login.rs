//! Credential login and session-token issuance.

use jsonwebtoken::{EncodingKey, Header, encode};
use std::time::{SystemTime, UNIX_EPOCH};

use emporia_auth_types::cookie::ACCESS_TOKEN_EXP;
use emporia_auth_types::token::JwtClaims;

use crate::domain::repository::AccountRepository;
use crate::domain::types::{Account, normalize_email};
use crate::error::AccountsServiceError;
use crate::usecase::password::verify_password;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Mint the session JWT for a logged-in account.
pub fn issue_access_token(
    account: &Account,
    secret: &str,
) -> Result<(String, u64), AccountsServiceError> {
    let exp = now_secs() + ACCESS_TOKEN_EXP;
    let claims = JwtClaims {
        sub: account.id.to_string(),
        prt: account.is_partner,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AccountsServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> LoginUseCase<A> {
    /// Ordinary email + password check. No OTP is consumed on login.
    ///
    /// Unknown email and wrong password are deliberately the same error;
    /// the activation and suspension checks run only after the credential
    /// is proven, so they leak nothing to a guesser.
    pub async fn execute(&self, input: LoginInput) -> Result<Account, AccountsServiceError> {
        let account = self
            .accounts
            .find_by_email(&normalize_email(&input.email))
            .await?
            .ok_or(AccountsServiceError::InvalidCredentials)?;

        if !verify_password(&input.password, &account.password_hash)? {
            return Err(AccountsServiceError::InvalidCredentials);
        }
        if !account.is_active {
            return Err(AccountsServiceError::AccountInactive);
        }
        if account.is_suspended {
            return Err(AccountsServiceError::AccountSuspended);
        }

        Ok(account)
    }
}
