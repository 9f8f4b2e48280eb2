//! Registration, activation, and resend orchestration.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::repository::{AccountRepository, Mailer, OtpRepository};
use crate::domain::types::{
    Account, MIN_PASSWORD_LEN, OtpPurpose, normalize_email, validate_email,
};
use crate::error::AccountsServiceError;
use crate::usecase::otp::{deliver_code, issue, issue_if_none_valid, verify};
use crate::usecase::password::hash_password;

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub email: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub password: String,
    pub is_partner: bool,
}

pub struct RegisterUseCase<A, O, M>
where
    A: AccountRepository,
    O: OtpRepository,
    M: Mailer,
{
    pub accounts: A,
    pub otps: O,
    pub mailer: M,
}

impl<A, O, M> RegisterUseCase<A, O, M>
where
    A: AccountRepository,
    O: OtpRepository,
    M: Mailer,
{
    /// Create an inactive account, issue a signup code, and mail it.
    pub async fn execute(&self, input: RegisterInput) -> Result<Account, AccountsServiceError> {
        let email = normalize_email(&input.email);
        if !validate_email(&email) {
            return Err(AccountsServiceError::InvalidEmail);
        }
        if input.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AccountsServiceError::WeakPassword);
        }
        if self.accounts.find_by_email(&email).await?.is_some() {
            return Err(AccountsServiceError::EmailTaken);
        }

        let account = Account {
            id: Uuid::new_v4(),
            email,
            full_name: input.full_name,
            date_of_birth: input.date_of_birth,
            password_hash: hash_password(&input.password)?,
            is_active: false,
            is_suspended: false,
            is_partner: input.is_partner,
            is_staff: false,
            created_at: Utc::now(),
        };
        self.accounts.create(&account).await?;

        let code = issue(&self.otps, account.id, OtpPurpose::Signup).await?;
        deliver_code(&self.mailer, &account.email, &code.code).await;

        Ok(account)
    }
}

// ── Activate ─────────────────────────────────────────────────────────────────

pub struct ActivateAccountUseCase<A, O>
where
    A: AccountRepository,
    O: OtpRepository,
{
    pub accounts: A,
    pub otps: O,
}

impl<A, O> ActivateAccountUseCase<A, O>
where
    A: AccountRepository,
    O: OtpRepository,
{
    /// Consume a signup code and flip the account active.
    pub async fn execute(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Account, AccountsServiceError> {
        let (_code, mut account) =
            verify(&self.accounts, &self.otps, email, code, OtpPurpose::Signup).await?;
        self.accounts.set_active(account.id).await?;
        account.is_active = true;
        Ok(account)
    }
}

// ── Resend ───────────────────────────────────────────────────────────────────

pub struct ResendOtpUseCase<A, O, M>
where
    A: AccountRepository,
    O: OtpRepository,
    M: Mailer,
{
    pub accounts: A,
    pub otps: O,
    pub mailer: M,
}

impl<A, O, M> ResendOtpUseCase<A, O, M>
where
    A: AccountRepository,
    O: OtpRepository,
    M: Mailer,
{
    /// Re-issue a signup code unless a valid one is still outstanding.
    /// Returns whether a new code was minted; when `false` the caller should
    /// check their inbox for the still-valid earlier code.
    pub async fn execute(&self, email: &str) -> Result<bool, AccountsServiceError> {
        let account = self
            .accounts
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;

        if account.is_active {
            return Err(AccountsServiceError::AlreadyActive);
        }

        let (code, created) =
            issue_if_none_valid(&self.otps, account.id, OtpPurpose::Signup).await?;
        if created {
            deliver_code(&self.mailer, &account.email, &code.code).await;
        }
        Ok(created)
    }
}
