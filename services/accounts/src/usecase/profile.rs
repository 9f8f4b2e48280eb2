use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::repository::AccountRepository;
use crate::domain::types::Account;
use crate::error::AccountsServiceError;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> GetProfileUseCase<A> {
    pub async fn execute(&self, account_id: Uuid) -> Result<Account, AccountsServiceError> {
        self.accounts
            .find_by_id(account_id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

pub struct UpdateProfileUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> UpdateProfileUseCase<A> {
    pub async fn execute(
        &self,
        account_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<(), AccountsServiceError> {
        if input.full_name.is_none() && input.date_of_birth.is_none() {
            return Err(AccountsServiceError::MissingData);
        }
        self.accounts
            .update_profile(
                account_id,
                input.full_name.as_deref(),
                input.date_of_birth,
            )
            .await
    }
}
