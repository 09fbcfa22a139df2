use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

pub const DEFAULT_DIARY_CAPACITY: usize = 10;

/// One notebook line: what was sown, sprayed or watered on a given day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiaryEntry {
    pub date: String,
    pub crop: String,
    pub seed: String,
    pub fertilizer: String,
    pub pesticide: String,
    pub irrigation: String,
}

impl DiaryEntry {
    fn trimmed(self) -> Self {
        Self {
            date: self.date.trim().to_string(),
            crop: self.crop.trim().to_string(),
            seed: self.seed.trim().to_string(),
            fertilizer: self.fertilizer.trim().to_string(),
            pesticide: self.pesticide.trim().to_string(),
            irrigation: self.irrigation.trim().to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        [
            &self.date,
            &self.crop,
            &self.seed,
            &self.fertilizer,
            &self.pesticide,
            &self.irrigation,
        ]
        .iter()
        .all(|field| field.is_empty())
    }
}

/// Per-farmer notebooks holding only the most recent entries, newest first.
#[derive(Debug)]
pub struct FarmDiary {
    capacity: usize,
    notebooks: Mutex<HashMap<String, VecDeque<DiaryEntry>>>,
}

impl Default for FarmDiary {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_DIARY_CAPACITY)
    }
}

impl FarmDiary {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            notebooks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns `None` when every field is empty after trimming; nothing is stored then.
    pub fn record(&self, owner: &str, entry: DiaryEntry) -> Result<Option<DiaryEntry>, DiaryError> {
        let entry = entry.trimmed();
        if entry.is_blank() {
            return Ok(None);
        }

        let mut notebooks = self.lock()?;
        let notebook = notebooks.entry(owner.to_string()).or_default();
        notebook.push_front(entry.clone());
        notebook.truncate(self.capacity);
        Ok(Some(entry))
    }

    pub fn entries(&self, owner: &str) -> Result<Vec<DiaryEntry>, DiaryError> {
        let notebooks = self.lock()?;
        Ok(notebooks
            .get(owner)
            .map(|notebook| notebook.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, VecDeque<DiaryEntry>>>, DiaryError> {
        self.notebooks
            .lock()
            .map_err(|_| DiaryError::Unavailable("diary lock poisoned".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiaryError {
    #[error("diary unavailable: {0}")]
    Unavailable(String),
}
