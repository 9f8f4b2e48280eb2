use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// One-time code length in decimal digits.
pub const OTP_CODE_LEN: usize = 6;

/// One-time code time-to-live in seconds (5 minutes).
pub const OTP_TTL_SECS: i64 = 300;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Account identity record. `is_active` starts false and flips to true only
/// through signup OTP verification; suspension is an administrative action.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub password_hash: String,
    pub is_active: bool,
    pub is_suspended: bool,
    pub is_partner: bool,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

/// Context a one-time code was issued for. A code is only accepted for the
/// purpose it was minted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPurpose {
    Signup,
    Login,
    ResetPassword,
}

impl OtpPurpose {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Login => "login",
            Self::ResetPassword => "reset_password",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "signup" => Some(Self::Signup),
            "login" => Some(Self::Login),
            "reset_password" => Some(Self::ResetPassword),
            _ => None,
        }
    }
}

impl std::fmt::Display for OtpPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-time code proving control of an account's email.
///
/// Rows are append-only audit records: the single permitted mutation is the
/// one-way `consumed_at: None -> Some` transition performed by the verifier.
#[derive(Debug, Clone)]
pub struct OneTimeCode {
    pub id: Uuid,
    pub account_id: Uuid,
    pub code: String,
    pub purpose: OtpPurpose,
    pub expires_at: DateTime<Utc>,
    pub consumed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl OneTimeCode {
    /// A code is usable strictly before its expiry instant.
    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        at >= self.expires_at
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed_at.is_some()
    }
}

/// Shipping address attached to an account.
#[derive(Debug, Clone)]
pub struct Address {
    pub id: Uuid,
    pub account_id: Uuid,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

/// Canonical form used for storage and lookup: trimmed, lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Minimal shape check on an already-normalized email.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
