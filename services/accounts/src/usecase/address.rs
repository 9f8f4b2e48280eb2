use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::AddressRepository;
use crate::domain::types::Address;
use crate::error::AccountsServiceError;

// ── ListAddresses ────────────────────────────────────────────────────────────

pub struct ListAddressesUseCase<R: AddressRepository> {
    pub addresses: R,
}

impl<R: AddressRepository> ListAddressesUseCase<R> {
    pub async fn execute(&self, account_id: Uuid) -> Result<Vec<Address>, AccountsServiceError> {
        self.addresses.list_by_account(account_id).await
    }
}

// ── CreateAddress ────────────────────────────────────────────────────────────

pub struct CreateAddressInput {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

pub struct CreateAddressUseCase<R: AddressRepository> {
    pub addresses: R,
}

impl<R: AddressRepository> CreateAddressUseCase<R> {
    pub async fn execute(
        &self,
        account_id: Uuid,
        input: CreateAddressInput,
    ) -> Result<Address, AccountsServiceError> {
        if input.line1.trim().is_empty()
            || input.city.trim().is_empty()
            || input.postal_code.trim().is_empty()
            || input.country.trim().is_empty()
        {
            return Err(AccountsServiceError::MissingData);
        }

        let address = Address {
            id: Uuid::new_v4(),
            account_id,
            line1: input.line1,
            line2: input.line2,
            city: input.city,
            postal_code: input.postal_code,
            country: input.country,
            created_at: Utc::now(),
        };
        self.addresses.create(&address).await?;
        Ok(address)
    }
}
