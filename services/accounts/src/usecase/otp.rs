//! One-time code issuance and verification.

use chrono::{Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::{AccountRepository, Mailer, OtpRepository};
use crate::domain::types::{Account, OTP_TTL_SECS, OneTimeCode, OtpPurpose, normalize_email};
use crate::error::AccountsServiceError;

/// 6-digit numeric code, uniform over the full 10^6 space (leading zeros
/// included — the code is a string, not a number).
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    format!("{:06}", rng.random_range(0..1_000_000))
}

/// Mint and persist a fresh code for (account, purpose).
///
/// Prior rows are never mutated or deleted; a new code supersedes an old one
/// simply by being more recent. The returned code is unconsumed and valid
/// for the full TTL by construction.
pub async fn issue<O>(
    otps: &O,
    account_id: Uuid,
    purpose: OtpPurpose,
) -> Result<OneTimeCode, AccountsServiceError>
where
    O: OtpRepository,
{
    let now = Utc::now();
    let code = OneTimeCode {
        id: Uuid::new_v4(),
        account_id,
        code: generate_code(),
        purpose,
        expires_at: now + Duration::seconds(OTP_TTL_SECS),
        consumed_at: None,
        created_at: now,
    };
    otps.create(&code).await?;
    Ok(code)
}

/// Reuse-suppressing issuance: while an unconsumed, unexpired code exists
/// for (account, purpose), return it with `created = false` instead of
/// minting another. Multiple simultaneously-valid codes would dilute the
/// short numeric space.
pub async fn issue_if_none_valid<O>(
    otps: &O,
    account_id: Uuid,
    purpose: OtpPurpose,
) -> Result<(OneTimeCode, bool), AccountsServiceError>
where
    O: OtpRepository,
{
    if let Some(existing) = otps.find_latest_unconsumed(account_id, purpose).await? {
        if !existing.is_expired(Utc::now()) {
            return Ok((existing, false));
        }
    }
    let fresh = issue(otps, account_id, purpose).await?;
    Ok((fresh, true))
}

/// Validate a submitted code and consume it.
///
/// Error contract:
/// - unknown email -> `AccountNotFound`
/// - no unconsumed row matching (account, code, purpose) -> `InvalidCode`;
///   a correct-but-already-consumed code yields the same error, so a caller
///   cannot tell "wrong" from "spent"
/// - matching row past expiry -> `CodeExpired`, and the row is NOT consumed:
///   retries keep yielding `CodeExpired`, never degrading to `InvalidCode`
/// - lost the consumed-flag compare-and-set to a concurrent verifier ->
///   `InvalidCode` (the "already used" branch)
pub async fn verify<A, O>(
    accounts: &A,
    otps: &O,
    email: &str,
    code: &str,
    purpose: OtpPurpose,
) -> Result<(OneTimeCode, Account), AccountsServiceError>
where
    A: AccountRepository,
    O: OtpRepository,
{
    let account = accounts
        .find_by_email(&normalize_email(email))
        .await?
        .ok_or(AccountsServiceError::AccountNotFound)?;

    let otp = otps
        .find_latest_matching(account.id, code, purpose)
        .await?
        .ok_or(AccountsServiceError::InvalidCode)?;

    if otp.is_expired(Utc::now()) {
        return Err(AccountsServiceError::CodeExpired);
    }

    if !otps.consume(otp.id).await? {
        return Err(AccountsServiceError::InvalidCode);
    }

    Ok((otp, account))
}

/// Fire-and-forget delivery: a failed send never invalidates the code, the
/// user recovers through the resend endpoint.
pub async fn deliver_code<M: Mailer>(mailer: &M, email: &str, code: &str) {
    if let Err(e) = mailer.send_code(email, code).await {
        tracing::warn!(error = %e, "one-time code delivery failed");
    }
}
