use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Validated ten-digit Indian mobile number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MobileNumber(pub(crate) String);

impl MobileNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn last_four(&self) -> &str {
        &self.0[self.0.len().saturating_sub(4)..]
    }

    /// `******1234`
    pub fn masked(&self) -> String {
        format!("******{}", self.last_four())
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registered farmer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub mobile: MobileNumber,
    pub name: String,
    pub registered_at: DateTime<Utc>,
    pub verified: bool,
    pub last_login: DateTime<Utc>,
}

impl Account {
    pub fn register(mobile: MobileNumber, name: Option<&str>, now: DateTime<Utc>) -> Self {
        let name = match name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => format!("Farmer_{}", mobile.last_four()),
        };

        Self {
            mobile,
            name,
            registered_at: now,
            verified: true,
            last_login: now,
        }
    }
}

/// Whether an OTP request leads to a first registration or a returning login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthAction {
    Signup,
    Login,
}

/// OTP limits. Defaults: six digits, five minute expiry, one minute resend cooldown and
/// three attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpPolicy {
    pub code_length: usize,
    pub expiry_seconds: i64,
    pub resend_cooldown_seconds: i64,
    pub max_attempts: u8,
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self {
            code_length: 6,
            expiry_seconds: 300,
            resend_cooldown_seconds: 60,
            max_attempts: 3,
        }
    }
}

impl OtpPolicy {
    pub(crate) fn expiry(&self) -> Duration {
        Duration::seconds(self.expiry_seconds)
    }

    pub(crate) fn cooldown(&self) -> Duration {
        Duration::seconds(self.resend_cooldown_seconds)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PendingOtp {
    pub(crate) code: String,
    pub(crate) sent_at: DateTime<Utc>,
    pub(crate) expires_at: DateTime<Utc>,
    pub(crate) attempts: u8,
}

/// Returned by an OTP request. The code is echoed back because no SMS gateway is wired in.
#[derive(Debug, Clone, Serialize)]
pub struct OtpDispatch {
    pub message: String,
    pub masked_destination: String,
    pub action: AuthAction,
    pub is_registered: bool,
    pub otp_for_demo: String,
    pub expires_at: DateTime<Utc>,
}

/// Opaque bearer session issued after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub phone: String,
    pub issued_at: DateTime<Utc>,
}

/// Result of a verified OTP: the account, a fresh session and whether it was just created.
#[derive(Debug, Clone, Serialize)]
pub struct AuthOutcome {
    pub message: String,
    pub account: Account,
    pub session: Session,
    pub new_account: bool,
}
