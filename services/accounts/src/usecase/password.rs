//! Password hashing plus the forgot/reset flows.

use argon2::password_hash::{PasswordHash, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::domain::repository::{AccountRepository, Mailer, OtpRepository};
use crate::domain::types::{MIN_PASSWORD_LEN, OtpPurpose, normalize_email};
use crate::error::AccountsServiceError;
use crate::usecase::otp::{deliver_code, issue, verify};

/// Argon2id with default params and a random salt; output is a PHC string.
pub fn hash_password(password: &str) -> Result<String, AccountsServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AccountsServiceError::Internal(anyhow::anyhow!("hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Timing-safe verification against a stored PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AccountsServiceError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AccountsServiceError::Internal(anyhow::anyhow!("parse password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

// ── ForgotPassword ───────────────────────────────────────────────────────────

pub struct ForgotPasswordUseCase<A, O, M>
where
    A: AccountRepository,
    O: OtpRepository,
    M: Mailer,
{
    pub accounts: A,
    pub otps: O,
    pub mailer: M,
}

impl<A, O, M> ForgotPasswordUseCase<A, O, M>
where
    A: AccountRepository,
    O: OtpRepository,
    M: Mailer,
{
    /// Issue a reset code. Unlike the signup resend path this mints a fresh
    /// code on every request — no reuse suppression.
    pub async fn execute(&self, email: &str) -> Result<(), AccountsServiceError> {
        let account = self
            .accounts
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;

        let code = issue(&self.otps, account.id, OtpPurpose::ResetPassword).await?;
        deliver_code(&self.mailer, &account.email, &code.code).await;
        Ok(())
    }
}

// ── ResetPassword ────────────────────────────────────────────────────────────

pub struct ResetPasswordInput {
    pub email: String,
    pub code: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub struct ResetPasswordUseCase<A, O>
where
    A: AccountRepository,
    O: OtpRepository,
{
    pub accounts: A,
    pub otps: O,
}

impl<A, O> ResetPasswordUseCase<A, O>
where
    A: AccountRepository,
    O: OtpRepository,
{
    /// Consume a reset code and store the new password hash. The mismatch
    /// check runs before any OTP interaction so a typo never burns the code.
    pub async fn execute(&self, input: ResetPasswordInput) -> Result<(), AccountsServiceError> {
        if input.new_password != input.confirm_password {
            return Err(AccountsServiceError::PasswordMismatch);
        }
        if input.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AccountsServiceError::WeakPassword);
        }

        let (_code, account) = verify(
            &self.accounts,
            &self.otps,
            &input.email,
            &input.code,
            OtpPurpose::ResetPassword,
        )
        .await?;

        let hash = hash_password(&input.new_password)?;
        self.accounts.set_password_hash(account.id, &hash).await?;
        Ok(())
    }
}
