use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::accounts::{Account, AccountRepository, AccountService, MobileNumber, RepositoryError};

pub(super) const MOBILE: &str = "9847012345";

#[derive(Default, Clone)]
pub(crate) struct MemoryAccounts {
    records: Arc<Mutex<HashMap<MobileNumber, Account>>>,
}

impl AccountRepository for MemoryAccounts {
    fn insert(&self, account: Account) -> Result<Account, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&account.mobile) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(account.mobile.clone(), account.clone());
        Ok(account)
    }

    fn update(&self, account: Account) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.get_mut(&account.mobile) {
            Some(existing) => {
                *existing = account;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, mobile: &MobileNumber) -> Result<Option<Account>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(mobile).cloned())
    }

    fn remove(&self, mobile: &MobileNumber) -> Result<Option<Account>, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.remove(mobile))
    }

    fn list(&self) -> Result<Vec<Account>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct UnavailableAccounts;

impl AccountRepository for UnavailableAccounts {
    fn insert(&self, _account: Account) -> Result<Account, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn update(&self, _account: Account) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _mobile: &MobileNumber) -> Result<Option<Account>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn remove(&self, _mobile: &MobileNumber) -> Result<Option<Account>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Account>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<AccountService<MemoryAccounts>>, MemoryAccounts) {
    let repository = MemoryAccounts::default();
    let service = Arc::new(AccountService::new(Arc::new(repository.clone())));
    (service, repository)
}

pub(super) fn morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 6, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn later(seconds: i64) -> DateTime<Utc> {
    morning() + chrono::Duration::seconds(seconds)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
