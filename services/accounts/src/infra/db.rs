use anyhow::Context as _;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, sea_query::Expr,
};
use uuid::Uuid;

use emporia_accounts_schema::{accounts, addresses, one_time_codes};

use crate::domain::repository::{AccountRepository, AddressRepository, OtpRepository};
use crate::domain::types::{Account, Address, OneTimeCode, OtpPurpose};
use crate::error::AccountsServiceError;

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find account by id")?;
        Ok(model.map(account_from_model))
    }

    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError> {
        accounts::ActiveModel {
            id: Set(account.id),
            email: Set(account.email.clone()),
            full_name: Set(account.full_name.clone()),
            date_of_birth: Set(account.date_of_birth),
            password_hash: Set(account.password_hash.clone()),
            is_active: Set(account.is_active),
            is_suspended: Set(account.is_suspended),
            is_partner: Set(account.is_partner),
            is_staff: Set(account.is_staff),
            created_at: Set(account.created_at),
        }
        .insert(&self.db)
        .await
        .context("create account")?;
        Ok(())
    }

    async fn set_active(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        accounts::ActiveModel {
            id: Set(id),
            is_active: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set account active")?;
        Ok(())
    }

    async fn set_password_hash(&self, id: Uuid, hash: &str) -> Result<(), AccountsServiceError> {
        accounts::ActiveModel {
            id: Set(id),
            password_hash: Set(hash.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set account password hash")?;
        Ok(())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        full_name: Option<&str>,
        date_of_birth: Option<NaiveDate>,
    ) -> Result<(), AccountsServiceError> {
        let mut am = accounts::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(name) = full_name {
            am.full_name = Set(name.to_owned());
        }
        if let Some(dob) = date_of_birth {
            am.date_of_birth = Set(dob);
        }
        am.update(&self.db)
            .await
            .context("update account profile")?;
        Ok(())
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: model.id,
        email: model.email,
        full_name: model.full_name,
        date_of_birth: model.date_of_birth,
        password_hash: model.password_hash,
        is_active: model.is_active,
        is_suspended: model.is_suspended,
        is_partner: model.is_partner,
        is_staff: model.is_staff,
        created_at: model.created_at,
    }
}

// ── One-time code repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbOtpRepository {
    async fn create(&self, code: &OneTimeCode) -> Result<(), AccountsServiceError> {
        one_time_codes::ActiveModel {
            id: Set(code.id),
            account_id: Set(code.account_id),
            code: Set(code.code.clone()),
            purpose: Set(code.purpose.as_str().to_owned()),
            expires_at: Set(code.expires_at),
            consumed_at: Set(None),
            created_at: Set(code.created_at),
        }
        .insert(&self.db)
        .await
        .context("create one-time code")?;
        Ok(())
    }

    async fn find_latest_unconsumed(
        &self,
        account_id: Uuid,
        purpose: OtpPurpose,
    ) -> Result<Option<OneTimeCode>, AccountsServiceError> {
        let model = one_time_codes::Entity::find()
            .filter(one_time_codes::Column::AccountId.eq(account_id))
            .filter(one_time_codes::Column::Purpose.eq(purpose.as_str()))
            .filter(one_time_codes::Column::ConsumedAt.is_null())
            .order_by_desc(one_time_codes::Column::CreatedAt)
            // id as deterministic tie-break for same-timestamp rows
            .order_by_desc(one_time_codes::Column::Id)
            .one(&self.db)
            .await
            .context("find latest unconsumed code")?;
        model.map(otp_from_model).transpose()
    }

    async fn find_latest_matching(
        &self,
        account_id: Uuid,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<OneTimeCode>, AccountsServiceError> {
        let model = one_time_codes::Entity::find()
            .filter(one_time_codes::Column::AccountId.eq(account_id))
            .filter(one_time_codes::Column::Code.eq(code))
            .filter(one_time_codes::Column::Purpose.eq(purpose.as_str()))
            .filter(one_time_codes::Column::ConsumedAt.is_null())
            .order_by_desc(one_time_codes::Column::CreatedAt)
            .order_by_desc(one_time_codes::Column::Id)
            .one(&self.db)
            .await
            .context("find latest matching code")?;
        model.map(otp_from_model).transpose()
    }

    async fn consume(&self, id: Uuid) -> Result<bool, AccountsServiceError> {
        // Compare-and-set on the consumed flag: the `consumed_at IS NULL`
        // predicate serializes racing verifiers, only one update sticks.
        let result = one_time_codes::Entity::update_many()
            .col_expr(one_time_codes::Column::ConsumedAt, Expr::value(Utc::now()))
            .filter(one_time_codes::Column::Id.eq(id))
            .filter(one_time_codes::Column::ConsumedAt.is_null())
            .exec(&self.db)
            .await
            .context("consume one-time code")?;
        Ok(result.rows_affected > 0)
    }
}

fn otp_from_model(model: one_time_codes::Model) -> Result<OneTimeCode, AccountsServiceError> {
    let purpose = OtpPurpose::from_str(&model.purpose)
        .ok_or_else(|| anyhow::anyhow!("unknown otp purpose in store: {}", model.purpose))?;
    Ok(OneTimeCode {
        id: model.id,
        account_id: model.account_id,
        code: model.code,
        purpose,
        expires_at: model.expires_at,
        consumed_at: model.consumed_at,
        created_at: model.created_at,
    })
}

// ── Address repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAddressRepository {
    pub db: DatabaseConnection,
}

impl AddressRepository for DbAddressRepository {
    async fn list_by_account(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<Address>, AccountsServiceError> {
        let models = addresses::Entity::find()
            .filter(addresses::Column::AccountId.eq(account_id))
            .order_by_asc(addresses::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list addresses by account")?;
        Ok(models.into_iter().map(address_from_model).collect())
    }

    async fn create(&self, address: &Address) -> Result<(), AccountsServiceError> {
        addresses::ActiveModel {
            id: Set(address.id),
            account_id: Set(address.account_id),
            line1: Set(address.line1.clone()),
            line2: Set(address.line2.clone()),
            city: Set(address.city.clone()),
            postal_code: Set(address.postal_code.clone()),
            country: Set(address.country.clone()),
            created_at: Set(address.created_at),
        }
        .insert(&self.db)
        .await
        .context("create address")?;
        Ok(())
    }
}

fn address_from_model(model: addresses::Model) -> Address {
    Address {
        id: model.id,
        account_id: model.account_id,
        line1: model.line1,
        line2: model.line2,
        city: model.city,
        postal_code: model.postal_code,
        country: model.country,
        created_at: model.created_at,
    }
}
