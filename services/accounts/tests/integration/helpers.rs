use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use emporia_accounts::domain::repository::{
    AccountRepository, AddressRepository, Mailer, OtpRepository,
};
use emporia_accounts::domain::types::{Account, Address, OneTimeCode, OtpPurpose};
use emporia_accounts::error::AccountsServiceError;
use emporia_accounts::usecase::password::hash_password;

// ── Builders ─────────────────────────────────────────────────────────────────

pub fn test_account() -> Account {
    Account {
        id: Uuid::new_v4(),
        email: "shopper@example.com".to_owned(),
        full_name: "Test Shopper".to_owned(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        password_hash: hash_password("hunter2!").unwrap(),
        is_active: true,
        is_suspended: false,
        is_partner: false,
        is_staff: false,
        created_at: Utc::now(),
    }
}

pub fn inactive_account() -> Account {
    Account {
        is_active: false,
        ..test_account()
    }
}

/// A code that is still within its TTL.
pub fn valid_code(account_id: Uuid, code: &str, purpose: OtpPurpose) -> OneTimeCode {
    let now = Utc::now();
    OneTimeCode {
        id: Uuid::new_v4(),
        account_id,
        code: code.to_owned(),
        purpose,
        expires_at: now + chrono::Duration::seconds(300),
        consumed_at: None,
        created_at: now,
    }
}

/// A code whose TTL has already elapsed.
pub fn expired_code(account_id: Uuid, code: &str, purpose: OtpPurpose) -> OneTimeCode {
    let now = Utc::now();
    OneTimeCode {
        expires_at: now - chrono::Duration::seconds(1),
        created_at: now - chrono::Duration::seconds(301),
        ..valid_code(account_id, code, purpose)
    }
}

// ── MockAccountRepo ──────────────────────────────────────────────────────────

pub struct MockAccountRepo {
    pub accounts: Arc<Mutex<Vec<Account>>>,
}

impl MockAccountRepo {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn accounts_handle(&self) -> Arc<Mutex<Vec<Account>>> {
        Arc::clone(&self.accounts)
    }
}

impl AccountRepository for MockAccountRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountsServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError> {
        self.accounts.lock().unwrap().push(account.clone());
        Ok(())
    }

    async fn set_active(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(a) = accounts.iter_mut().find(|a| a.id == id) {
            a.is_active = true;
        }
        Ok(())
    }

    async fn set_password_hash(&self, id: Uuid, hash: &str) -> Result<(), AccountsServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(a) = accounts.iter_mut().find(|a| a.id == id) {
            a.password_hash = hash.to_owned();
        }
        Ok(())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        full_name: Option<&str>,
        date_of_birth: Option<NaiveDate>,
    ) -> Result<(), AccountsServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(a) = accounts.iter_mut().find(|a| a.id == id) {
            if let Some(name) = full_name {
                a.full_name = name.to_owned();
            }
            if let Some(dob) = date_of_birth {
                a.date_of_birth = dob;
            }
        }
        Ok(())
    }
}

// ── MockOtpRepo ──────────────────────────────────────────────────────────────

pub struct MockOtpRepo {
    pub codes: Arc<Mutex<Vec<OneTimeCode>>>,
}

impl MockOtpRepo {
    pub fn new(codes: Vec<OneTimeCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn codes_handle(&self) -> Arc<Mutex<Vec<OneTimeCode>>> {
        Arc::clone(&self.codes)
    }

    /// Second handle onto the same store, for simulating concurrent verifiers.
    pub fn sharing_store(&self) -> Self {
        Self {
            codes: Arc::clone(&self.codes),
        }
    }
}

fn latest<'a, I>(iter: I) -> Option<&'a OneTimeCode>
where
    I: Iterator<Item = &'a OneTimeCode>,
{
    iter.max_by_key(|c| c.created_at)
}

impl OtpRepository for MockOtpRepo {
    async fn create(&self, code: &OneTimeCode) -> Result<(), AccountsServiceError> {
        self.codes.lock().unwrap().push(code.clone());
        Ok(())
    }

    async fn find_latest_unconsumed(
        &self,
        account_id: Uuid,
        purpose: OtpPurpose,
    ) -> Result<Option<OneTimeCode>, AccountsServiceError> {
        let codes = self.codes.lock().unwrap();
        Ok(latest(codes.iter().filter(|c| {
            c.account_id == account_id && c.purpose == purpose && c.consumed_at.is_none()
        }))
        .cloned())
    }

    async fn find_latest_matching(
        &self,
        account_id: Uuid,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<OneTimeCode>, AccountsServiceError> {
        let codes = self.codes.lock().unwrap();
        Ok(latest(codes.iter().filter(|c| {
            c.account_id == account_id
                && c.code == code
                && c.purpose == purpose
                && c.consumed_at.is_none()
        }))
        .cloned())
    }

    async fn consume(&self, id: Uuid) -> Result<bool, AccountsServiceError> {
        // Same single-winner semantics as the SQL conditional update.
        let mut codes = self.codes.lock().unwrap();
        match codes.iter_mut().find(|c| c.id == id && c.consumed_at.is_none()) {
            Some(c) => {
                c.consumed_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── MockAddressRepo ──────────────────────────────────────────────────────────

pub struct MockAddressRepo {
    pub addresses: Arc<Mutex<Vec<Address>>>,
}

impl MockAddressRepo {
    pub fn empty() -> Self {
        Self {
            addresses: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl AddressRepository for MockAddressRepo {
    async fn list_by_account(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<Address>, AccountsServiceError> {
        Ok(self
            .addresses
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn create(&self, address: &Address) -> Result<(), AccountsServiceError> {
        self.addresses.lock().unwrap().push(address.clone());
        Ok(())
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

/// Records every send; optionally fails each one to exercise the
/// delivery-is-best-effort path.
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
    pub fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for MockMailer {
    async fn send_code(&self, email: &str, code: &str) -> Result<(), AccountsServiceError> {
        if self.fail {
            return Err(AccountsServiceError::Internal(anyhow::anyhow!(
                "smtp unavailable"
            )));
        }
        self.sent
            .lock()
            .unwrap()
            .push((email.to_owned(), code.to_owned()));
        Ok(())
    }
}
