use alloc::string::{String, ToString};
use alloc::vec::Vec;
use chrono::{DateTime, Utc};

use crate::*;

/// Key holding the JSON array of `{t, m}` entries.
pub const SAVED_KEY: &str = "saved";

/// Key holding the save time as decimal epoch milliseconds.
pub const SAVED_AT_KEY: &str = "savedAt";

/// String key-value store that survives page reloads.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The whole card as persisted between page loads.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub entries: Vec<Entry>,
    pub saved_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn capture(board: &Board, now: DateTime<Utc>) -> Self {
        Self {
            entries: board.entries(),
            saved_at: now,
        }
    }

    pub fn store(&self, store: &mut (impl KeyValueStore + ?Sized)) -> Result<()> {
        let encoded = serde_json::to_string(&self.entries)
            .map_err(|err| BingoError::Snapshot(err.to_string()))?;
        store.set(SAVED_KEY, &encoded)?;
        store.set(SAVED_AT_KEY, &self.saved_at.timestamp_millis().to_string())
    }

    /// Reads the saved card, `Ok(None)` when nothing was ever saved.
    ///
    /// A missing or unreadable save time is read as the epoch, which makes the
    /// snapshot stale.
    pub fn load(store: &(impl KeyValueStore + ?Sized)) -> Result<Option<Self>> {
        let Some(encoded) = store.get(SAVED_KEY) else {
            return Ok(None);
        };

        let entries: Vec<Entry> = serde_json::from_str(&encoded)
            .map_err(|err| BingoError::Snapshot(err.to_string()))?;
        if entries.len() != BOARD_CELLS {
            return Err(BingoError::WrongCellCount {
                expected: BOARD_CELLS,
                found: entries.len(),
            });
        }

        let saved_at = store
            .get(SAVED_AT_KEY)
            .as_deref()
            .and_then(parse_millis)
            .unwrap_or(DateTime::UNIX_EPOCH);

        Ok(Some(Self { entries, saved_at }))
    }

    /// Whole seconds since the save, rounded down.
    pub fn age_secs(&self, now: DateTime<Utc>) -> i64 {
        (now - self.saved_at).num_milliseconds().div_euclid(1000)
    }

    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        self.age_secs(now) > STALE_AFTER_SECS
    }

    /// A card that never received clues, e.g. saved while the first load was failing.
    pub fn is_blank(&self) -> bool {
        self.entries.iter().all(|entry| entry.text.is_empty())
    }
}

fn parse_millis(raw: &str) -> Option<DateTime<Utc>> {
    let millis = raw.trim().parse::<f64>().ok().filter(|ms| ms.is_finite())?;
    DateTime::from_timestamp_millis(millis as i64)
}
