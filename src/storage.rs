//! Durable key-value storage backed by a single JSON file.
//!
//! The file holds one top-level object keyed by the names below. Every key
//! is decoded on its own, so a malformed value only costs that key.

use crate::errors::StorageError;
use crate::models::{Category, CategoryCounts, DailyHistory, Language, StreakState, TallyState};
use crate::tally::TallyStore;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

pub const KEY_TOTALS: &str = "totals";
pub const KEY_CURRENT: &str = "current";
pub const KEY_SELECTED_CATEGORY: &str = "selectedCategory";
pub const KEY_LANGUAGE: &str = "language";
pub const KEY_STATISTICS: &str = "statistics";
pub const KEY_DAILY_HISTORY: &str = "dailyHistory";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    totals: &'a CategoryCounts,
    current: &'a CategoryCounts,
    selected_category: Category,
    language: Language,
    statistics: &'a StreakState,
    daily_history: &'a DailyHistory,
}

/// Why a whole data file had to be discarded at startup. Per-key fallbacks
/// are not reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadIssue {
    Unreadable,
    Corrupt,
}

/// Loads the store, degrading to defaults on any failure. A missing file is
/// a fresh start, not an issue.
pub async fn load_store(path: &Path) -> (TallyStore, Option<LoadIssue>) {
    match fs::read(path).await {
        Ok(bytes) => decode_store(&bytes),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no saved data, starting fresh");
            (TallyStore::default(), None)
        }
        Err(err) => {
            error!("failed to read data file: {err}");
            (TallyStore::default(), Some(LoadIssue::Unreadable))
        }
    }
}

pub fn decode_store(bytes: &[u8]) -> (TallyStore, Option<LoadIssue>) {
    let entries: Map<String, Value> = match serde_json::from_slice(bytes) {
        Ok(entries) => entries,
        Err(err) => {
            error!("failed to parse data file: {err}");
            return (TallyStore::default(), Some(LoadIssue::Corrupt));
        }
    };

    let tally = TallyState {
        totals: field(&entries, KEY_TOTALS).unwrap_or_default(),
        current: field(&entries, KEY_CURRENT).unwrap_or_default(),
        selected_category: field(&entries, KEY_SELECTED_CATEGORY).unwrap_or_default(),
    };
    let language = field(&entries, KEY_LANGUAGE).unwrap_or_default();
    let streak = field(&entries, KEY_STATISTICS).unwrap_or_default();
    let mut history: DailyHistory = field(&entries, KEY_DAILY_HISTORY).unwrap_or_default();
    history.normalize();

    (TallyStore::from_parts(tally, language, streak, history), None)
}

pub fn encode_store(store: &TallyStore) -> Result<Vec<u8>, StorageError> {
    let tally = store.tally();
    let snapshot = Snapshot {
        totals: &tally.totals,
        current: &tally.current,
        selected_category: tally.selected_category,
        language: store.language(),
        statistics: store.streak(),
        daily_history: store.history(),
    };
    Ok(serde_json::to_vec_pretty(&snapshot)?)
}

/// Writes the full snapshot, never a delta.
pub async fn persist_store(path: &Path, store: &TallyStore) -> Result<(), StorageError> {
    let payload = encode_store(store)?;
    fs::write(path, payload).await?;
    Ok(())
}

fn field<T: DeserializeOwned>(entries: &Map<String, Value>, key: &str) -> Option<T> {
    let value = entries.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            warn!(key, "ignoring malformed stored value: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};
    use std::path::PathBuf;

    fn at(day: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 2, day, 18, 0, 0)
            .single()
            .expect("unambiguous local time")
    }

    fn unique_data_path(label: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("dhikr_storage_{label}_{}_{}.json", std::process::id(), nanos));
        path
    }

    fn busy_store() -> TallyStore {
        let mut store = TallyStore::default();
        store.set_language("en");
        store.increment_at(at(1));
        store.select_category("astaghfirullah");
        store.increment_at(at(2));
        store.increment_at(at(2));
        store
    }

    #[test]
    fn snapshot_round_trips() {
        let store = busy_store();
        let bytes = encode_store(&store).unwrap();
        assert_eq!(decode_store(&bytes), (store, None));
    }

    #[test]
    fn snapshot_uses_stable_keys() {
        let bytes = encode_store(&busy_store()).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value[KEY_TOTALS]["astaghfirullah"], 2);
        assert_eq!(value[KEY_CURRENT]["subhanallah"], 1);
        assert_eq!(value[KEY_SELECTED_CATEGORY], "astaghfirullah");
        assert_eq!(value[KEY_LANGUAGE], "en");
        assert_eq!(value[KEY_STATISTICS]["currentStreak"], 2);
        assert_eq!(value[KEY_DAILY_HISTORY][1]["date"], "2026-02-02");
        assert_eq!(value[KEY_DAILY_HISTORY][1]["count"], 3);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        assert_eq!(
            decode_store(b"{not json"),
            (TallyStore::default(), Some(LoadIssue::Corrupt))
        );
        assert_eq!(
            decode_store(b"[1, 2, 3]"),
            (TallyStore::default(), Some(LoadIssue::Corrupt))
        );
    }

    #[test]
    fn malformed_field_falls_back_alone() {
        let raw = serde_json::json!({
            "totals": { "subhanallah": 4, "lahawla": -2 },
            "current": { "alhamdulillah": 3 },
            "selectedCategory": "retired",
            "language": "th",
            "statistics": "garbage",
            "dailyHistory": [{ "date": "2026-02-01", "count": 3 }],
        });
        let (store, issue) = decode_store(raw.to_string().as_bytes());
        assert_eq!(issue, None);

        assert_eq!(store.tally().totals, CategoryCounts::default());
        assert_eq!(store.tally().current.get(Category::Alhamdulillah), 3);
        assert_eq!(store.selected_category(), Category::SubhanAllah);
        assert_eq!(store.language(), Language::Th);
        assert_eq!(store.streak(), &StreakState::default());
        assert_eq!(store.history().entries().len(), 1);
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let path = unique_data_path("missing");
        assert_eq!(load_store(&path).await, (TallyStore::default(), None));
    }

    #[tokio::test]
    async fn persist_then_load() {
        let path = unique_data_path("persist");
        let store = busy_store();

        persist_store(&path, &store).await.unwrap();
        let loaded = load_store(&path).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, (store, None));
    }

    #[tokio::test]
    async fn corrupt_file_on_disk_is_reported() {
        let path = unique_data_path("corrupt");
        std::fs::write(&path, b"{\"totals\": ").unwrap();
        let loaded = load_store(&path).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, (TallyStore::default(), Some(LoadIssue::Corrupt)));
    }

    #[tokio::test]
    async fn unreadable_path_is_reported() {
        let path = std::env::temp_dir();
        let (store, issue) = load_store(&path).await;
        assert_eq!(store, TallyStore::default());
        assert_eq!(issue, Some(LoadIssue::Unreadable));
    }

    #[tokio::test]
    async fn persist_into_missing_directory_fails() {
        let mut path = unique_data_path("nodir");
        path.push("nested/state.json");
        let err = persist_store(&path, &TallyStore::default()).await.unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
