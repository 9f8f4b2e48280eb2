#![allow(async_fn_in_trait)]

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::types::{Account, Address, OneTimeCode, OtpPurpose};
use crate::error::AccountsServiceError;

/// Repository for account records.
pub trait AccountRepository: Send + Sync {
    /// Lookup by normalized (lowercased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountsServiceError>;

    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError>;

    /// Flip `is_active` to true. Called only after signup OTP verification.
    async fn set_active(&self, id: Uuid) -> Result<(), AccountsServiceError>;

    async fn set_password_hash(&self, id: Uuid, hash: &str) -> Result<(), AccountsServiceError>;

    async fn update_profile(
        &self,
        id: Uuid,
        full_name: Option<&str>,
        date_of_birth: Option<NaiveDate>,
    ) -> Result<(), AccountsServiceError>;
}

/// Repository for one-time codes.
pub trait OtpRepository: Send + Sync {
    /// Insert a new code. Prior rows are never touched.
    async fn create(&self, code: &OneTimeCode) -> Result<(), AccountsServiceError>;

    /// Most recently created unconsumed code for (account, purpose),
    /// expired rows included — callers decide what expiry means.
    async fn find_latest_unconsumed(
        &self,
        account_id: Uuid,
        purpose: OtpPurpose,
    ) -> Result<Option<OneTimeCode>, AccountsServiceError>;

    /// Most recently created unconsumed code matching the submitted value
    /// for (account, purpose). Expired rows included.
    async fn find_latest_matching(
        &self,
        account_id: Uuid,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<OneTimeCode>, AccountsServiceError>;

    /// Atomically flip `consumed_at` from null to now. Returns `false` when
    /// the row was already consumed — under concurrent verification exactly
    /// one caller observes `true`.
    async fn consume(&self, id: Uuid) -> Result<bool, AccountsServiceError>;
}

/// Repository for shipping addresses.
pub trait AddressRepository: Send + Sync {
    async fn list_by_account(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<Address>, AccountsServiceError>;

    async fn create(&self, address: &Address) -> Result<(), AccountsServiceError>;
}

/// Outbound notification transport. Issuance never blocks on delivery:
/// failures are logged and swallowed, the code stays valid.
pub trait Mailer: Send + Sync {
    async fn send_code(&self, email: &str, code: &str) -> Result<(), AccountsServiceError>;
}
