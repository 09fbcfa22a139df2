use super::domain::{Account, MobileNumber};

/// Storage abstraction for registered accounts so the service can be exercised in isolation.
pub trait AccountRepository: Send + Sync {
    fn insert(&self, account: Account) -> Result<Account, RepositoryError>;
    fn update(&self, account: Account) -> Result<(), RepositoryError>;
    fn fetch(&self, mobile: &MobileNumber) -> Result<Option<Account>, RepositoryError>;
    fn remove(&self, mobile: &MobileNumber) -> Result<Option<Account>, RepositoryError>;
    fn list(&self) -> Result<Vec<Account>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("This mobile number is already registered.")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
