pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod tally;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{LoadIssue, load_store, persist_store};
pub use tally::TallyStore;
