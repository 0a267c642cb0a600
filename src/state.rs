use crate::storage::{LoadIssue, persist_store};
use crate::tally::TallyStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<TallyStore>>,
    /// Set when the saved data could not be used at startup.
    pub load_issue: Option<LoadIssue>,
}

impl AppState {
    pub fn new(data_path: PathBuf, store: TallyStore, load_issue: Option<LoadIssue>) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(store)),
            load_issue,
        }
    }

    /// Writes the snapshot while the caller still holds the store lock, so
    /// writes land in mutation order. Failures are logged and the in-memory
    /// state stays authoritative.
    pub async fn persist(&self, store: &TallyStore) {
        if let Err(err) = persist_store(&self.data_path, store).await {
            error!(path = %self.data_path.display(), "failed to persist state: {err}");
        }
    }
}
