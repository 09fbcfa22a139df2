use agrivision::accounts::{Account, AccountRepository, MobileNumber, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local account store; registrations are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAccountRepository {
    records: Arc<Mutex<HashMap<MobileNumber, Account>>>,
}

impl InMemoryAccountRepository {
    fn guard(&self) -> Result<MutexGuard<'_, HashMap<MobileNumber, Account>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("account store lock poisoned".to_string()))
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn insert(&self, account: Account) -> Result<Account, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&account.mobile) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(account.mobile.clone(), account.clone());
        Ok(account)
    }

    fn update(&self, account: Account) -> Result<(), RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&account.mobile) {
            guard.insert(account.mobile.clone(), account);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, mobile: &MobileNumber) -> Result<Option<Account>, RepositoryError> {
        Ok(self.guard()?.get(mobile).cloned())
    }

    fn remove(&self, mobile: &MobileNumber) -> Result<Option<Account>, RepositoryError> {
        Ok(self.guard()?.remove(mobile))
    }

    fn list(&self) -> Result<Vec<Account>, RepositoryError> {
        Ok(self.guard()?.values().cloned().collect())
    }
}
