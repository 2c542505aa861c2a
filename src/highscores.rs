//! Best-score persistence
//!
//! The best score is a single integer stored under a fixed key. Anything that
//! isn't a valid non-negative integer on load counts as "no score yet".

use crate::platform::{KeyValueStorage, StorageError};

/// Durable store for the best score
pub trait ScoreStore {
    /// Stored best score, `Ok(None)` if none was ever saved
    fn load(&self) -> Result<Option<u32>, StorageError>;

    fn save(&mut self, score: u32) -> Result<(), StorageError>;
}

/// Best score kept as a decimal string in a key/value storage
#[derive(Debug, Clone, Default)]
pub struct HighScoreStore<K> {
    storage: K,
}

impl<K: KeyValueStorage> HighScoreStore<K> {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "flappy-funster-highscore";

    pub fn new(storage: K) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }
}

impl<K: KeyValueStorage> ScoreStore for HighScoreStore<K> {
    fn load(&self) -> Result<Option<u32>, StorageError> {
        let Some(raw) = self.storage.get(Self::STORAGE_KEY)? else {
            return Ok(None);
        };
        raw.trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| StorageError::Malformed {
                key: Self::STORAGE_KEY.to_string(),
                value: raw,
            })
    }

    fn save(&mut self, score: u32) -> Result<(), StorageError> {
        self.storage.set(Self::STORAGE_KEY, &score.to_string())?;
        log::info!("High score saved ({})", score);
        Ok(())
    }
}

/// Load the best score, falling back to 0 on absence or any failure
pub fn load_high_score<S: ScoreStore + ?Sized>(store: &S) -> u32 {
    match store.load() {
        Ok(Some(score)) => {
            log::info!("Loaded high score {}", score);
            score
        }
        Ok(None) => {
            log::info!("No high score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Ignoring stored high score: {}", e);
            0
        }
    }
}
