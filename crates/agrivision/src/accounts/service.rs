use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use super::domain::{
    Account, AuthAction, AuthOutcome, MobileNumber, OtpDispatch, OtpPolicy, PendingOtp, Session,
};
use super::repository::{AccountRepository, RepositoryError};
use super::validation::{is_strong_password, validate_login_phone, validate_mobile};

/// Mobile-number accounts with OTP verification and bearer sessions.
///
/// Accounts live in the injected repository; pending codes and sessions are held by the
/// service itself and vanish with it.
pub struct AccountService<R> {
    repository: Arc<R>,
    policy: OtpPolicy,
    pending: Mutex<HashMap<MobileNumber, PendingOtp>>,
    sessions: Mutex<HashMap<String, Session>>,
}

impl<R> AccountService<R>
where
    R: AccountRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_policy(repository, OtpPolicy::default())
    }

    pub fn with_policy(repository: Arc<R>, policy: OtpPolicy) -> Self {
        Self {
            repository,
            policy,
            pending: Mutex::new(HashMap::new()),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> &OtpPolicy {
        &self.policy
    }

    /// Demo login: any ten-digit phone with a strong password gets a session.
    pub fn password_login(
        &self,
        phone: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<Session, AuthError> {
        let phone = validate_login_phone(phone)?;
        if !is_strong_password(password.trim()) {
            return Err(AuthError::WeakPassword);
        }
        self.issue_session(phone, now)
    }

    /// Issue a one-time code for signup or login, honouring the resend cooldown.
    pub fn request_otp(&self, mobile: &str, now: DateTime<Utc>) -> Result<OtpDispatch, AuthError> {
        let mobile = validate_mobile(mobile)?;
        let is_registered = self.repository.fetch(&mobile)?.is_some();

        let code = {
            let mut pending = lock(&self.pending, "otp")?;
            if let Some(existing) = pending.get(&mobile) {
                let elapsed = now - existing.sent_at;
                if elapsed < self.policy.cooldown() {
                    let remaining_secs = (self.policy.cooldown() - elapsed).num_seconds();
                    warn!(mobile = %mobile.masked(), remaining_secs, "otp requested during cooldown");
                    return Err(AuthError::Cooldown { remaining_secs });
                }
            }

            let code = generate_code(self.policy.code_length);
            pending.insert(
                mobile.clone(),
                PendingOtp {
                    code: code.clone(),
                    sent_at: now,
                    expires_at: now + self.policy.expiry(),
                    attempts: 0,
                },
            );
            code
        };

        let (action, greeting) = if is_registered {
            (AuthAction::Login, "Welcome back!")
        } else {
            (AuthAction::Signup, "Complete registration by verifying OTP.")
        };
        info!(mobile = %mobile.masked(), ?action, "otp issued");

        Ok(OtpDispatch {
            message: format!("OTP sent to {}. {greeting}", mobile.masked()),
            masked_destination: mobile.masked(),
            action,
            is_registered,
            otp_for_demo: code,
            expires_at: now + self.policy.expiry(),
        })
    }

    /// Check a code, then log the farmer in or register them on first verification.
    pub fn verify_otp(
        &self,
        mobile: &str,
        code: &str,
        name: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<AuthOutcome, AuthError> {
        let mobile = validate_mobile(mobile)?;
        self.check_code(&mobile, code.trim(), now)?;

        let (account, new_account, message) = match self.repository.fetch(&mobile)? {
            Some(mut account) => {
                account.last_login = now;
                self.repository.update(account.clone())?;
                (account, false, "Login successful! Welcome back.")
            }
            None => {
                let account = self
                    .repository
                    .insert(Account::register(mobile.clone(), name, now))?;
                (account, true, "Registration successful! Welcome to AgriVision.")
            }
        };
        info!(mobile = %mobile.masked(), new_account, "otp verified");

        let session = self.issue_session(mobile.to_string(), now)?;
        Ok(AuthOutcome {
            message: message.to_string(),
            account,
            session,
            new_account,
        })
    }

    /// Resolve a bearer token to its session.
    pub fn authenticate(&self, token: &str) -> Result<Session, AuthError> {
        lock(&self.sessions, "session")?
            .get(token.trim())
            .cloned()
            .ok_or(AuthError::InvalidSession)
    }

    pub fn logout(&self, token: &str) -> Result<Session, AuthError> {
        let session = lock(&self.sessions, "session")?
            .remove(token.trim())
            .ok_or(AuthError::InvalidSession)?;
        info!(phone = %session.phone, "session closed");
        Ok(session)
    }

    pub fn account(&self, mobile: &str) -> Result<Account, AuthError> {
        let mobile = validate_mobile(mobile)?;
        self.repository
            .fetch(&mobile)?
            .ok_or(AuthError::AccountNotFound)
    }

    pub fn accounts(&self) -> Result<Vec<Account>, AuthError> {
        let mut accounts = self.repository.list()?;
        accounts.sort_by(|left, right| left.mobile.cmp(&right.mobile));
        Ok(accounts)
    }

    /// Remove an account along with any sessions it still holds.
    pub fn delete_account(&self, mobile: &str) -> Result<Account, AuthError> {
        let mobile = validate_mobile(mobile)?;
        let removed = self
            .repository
            .remove(&mobile)?
            .ok_or(AuthError::AccountNotFound)?;
        lock(&self.sessions, "session")?.retain(|_, session| session.phone != mobile.as_str());
        info!(mobile = %mobile.masked(), "account deleted");
        Ok(removed)
    }

    fn check_code(
        &self,
        mobile: &MobileNumber,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        let mut pending = lock(&self.pending, "otp")?;
        let entry = pending.get_mut(mobile).ok_or(AuthError::NoPendingOtp)?;

        if now > entry.expires_at {
            pending.remove(mobile);
            return Err(AuthError::OtpExpired);
        }
        if entry.attempts >= self.policy.max_attempts {
            pending.remove(mobile);
            return Err(AuthError::TooManyAttempts);
        }

        if entry.code != code {
            entry.attempts += 1;
            let remaining = self.policy.max_attempts.saturating_sub(entry.attempts);
            warn!(mobile = %mobile.masked(), remaining, "otp mismatch");
            if remaining == 0 {
                pending.remove(mobile);
                return Err(AuthError::AttemptsExhausted);
            }
            return Err(AuthError::InvalidOtp { remaining });
        }

        pending.remove(mobile);
        Ok(())
    }

    fn issue_session(&self, phone: String, now: DateTime<Utc>) -> Result<Session, AuthError> {
        let session = Session {
            token: Uuid::new_v4().to_string(),
            phone,
            issued_at: now,
        };
        lock(&self.sessions, "session")?.insert(session.token.clone(), session.clone());
        Ok(session)
    }
}

fn generate_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn lock<'a, T>(mutex: &'a Mutex<T>, store: &str) -> Result<MutexGuard<'a, T>, AuthError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable(format!("{store} store poisoned")).into())
}

/// Error raised by the account service. Messages are shown to farmers as-is.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Mobile number is required.")]
    MissingMobile,
    #[error("Mobile number must contain only digits.")]
    NonNumericMobile,
    #[error("Mobile number must be exactly 10 digits.")]
    MobileLength,
    #[error("Mobile number must start with 6, 7, 8, or 9.")]
    MobilePrefix,
    #[error("Please enter your phone number.")]
    MissingPhone,
    #[error("Phone number must be exactly 10 digits.")]
    PhoneLength,
    #[error("Password must include letters, numbers and special characters.")]
    WeakPassword,
    #[error("Please wait {remaining_secs} seconds before requesting a new OTP.")]
    Cooldown { remaining_secs: i64 },
    #[error("No OTP was sent to this number. Please request a new OTP.")]
    NoPendingOtp,
    #[error("OTP has expired. Please request a new OTP.")]
    OtpExpired,
    #[error("Too many failed attempts. Please request a new OTP.")]
    TooManyAttempts,
    #[error("Invalid OTP. {remaining} attempts remaining.")]
    InvalidOtp { remaining: u8 },
    #[error("Invalid OTP. Maximum attempts exceeded. Please request a new OTP.")]
    AttemptsExhausted,
    #[error("session is missing or expired")]
    InvalidSession,
    #[error("User not found.")]
    AccountNotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AuthError {
    /// Malformed phone numbers or passwords, as opposed to failed verification.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuthError::MissingMobile
                | AuthError::NonNumericMobile
                | AuthError::MobileLength
                | AuthError::MobilePrefix
                | AuthError::MissingPhone
                | AuthError::PhoneLength
                | AuthError::WeakPassword
        )
    }
}
