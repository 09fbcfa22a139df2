//! Farmer accounts keyed by mobile number, OTP verification and bearer sessions.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
mod validation;

#[cfg(test)]
pub(crate) mod tests;

pub use domain::{
    Account, AuthAction, AuthOutcome, MobileNumber, OtpDispatch, OtpPolicy, Session,
};
pub use repository::{AccountRepository, RepositoryError};
pub use router::accounts_router;
pub use service::{AccountService, AuthError};
pub use validation::{is_strong_password, validate_mobile};
