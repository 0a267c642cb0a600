use crate::errors::AppError;
use crate::i18n::category_label;
use crate::models::{
    Category, CategoryPoint, ConfirmRequest, DestructiveAction, Intent, LanguageRequest,
    ResetRequest, SelectRequest, StateResponse, StatsResponse,
};
use crate::state::AppState;
use crate::tally::TallyStore;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::{Path, State},
    response::{Html, Redirect},
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_index(&store, &store.statistics(), state.load_issue))
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let store = state.store.lock().await;
    Json(to_response(&store, &state))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.lock().await;
    Json(store.statistics())
}

pub async fn increment(State(state): State<AppState>) -> Json<StateResponse> {
    Json(apply(&state, count_once).await)
}

pub async fn select(
    State(state): State<AppState>,
    Json(payload): Json<SelectRequest>,
) -> Json<StateResponse> {
    Json(apply(&state, |store| store.select_category(&payload.category)).await)
}

pub async fn reset(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<StateResponse>, AppError> {
    let category = match payload.category.as_deref() {
        Some(key) => Some(
            Category::from_key(key)
                .ok_or_else(|| AppError::bad_request(format!("unknown category '{key}'")))?,
        ),
        None => None,
    };
    let intent = Intent::from(payload.confirmed);

    let response = apply(&state, |store| {
        let category = category.unwrap_or_else(|| store.selected_category());
        store.apply(DestructiveAction::ResetCurrent(category), intent)
    })
    .await;
    Ok(Json(response))
}

pub async fn clear(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmRequest>,
) -> Json<StateResponse> {
    let intent = Intent::from(payload.confirmed);
    Json(apply(&state, |store| store.apply(DestructiveAction::ClearAll, intent)).await)
}

pub async fn language(
    State(state): State<AppState>,
    Json(payload): Json<LanguageRequest>,
) -> Json<StateResponse> {
    Json(apply(&state, |store| store.set_language(&payload.language)).await)
}

pub async fn count_form(State(state): State<AppState>) -> Redirect {
    apply(&state, count_once).await;
    Redirect::to("/")
}

pub async fn select_form(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Redirect {
    apply(&state, |store| store.select_category(&category)).await;
    Redirect::to("/")
}

pub async fn language_form(State(state): State<AppState>, Path(code): Path<String>) -> Redirect {
    apply(&state, |store| store.set_language(&code)).await;
    Redirect::to("/")
}

pub async fn reset_form(
    State(state): State<AppState>,
    Form(payload): Form<ConfirmRequest>,
) -> Redirect {
    let intent = Intent::from(payload.confirmed);
    apply(&state, |store| {
        let category = store.selected_category();
        store.apply(DestructiveAction::ResetCurrent(category), intent)
    })
    .await;
    Redirect::to("/")
}

pub async fn clear_form(
    State(state): State<AppState>,
    Form(payload): Form<ConfirmRequest>,
) -> Redirect {
    let intent = Intent::from(payload.confirmed);
    apply(&state, |store| store.apply(DestructiveAction::ClearAll, intent)).await;
    Redirect::to("/")
}

fn count_once(store: &mut TallyStore) -> bool {
    store.increment();
    true
}

/// Runs one mutation under the store lock and persists the result when it
/// changed anything.
async fn apply<F>(state: &AppState, mutate: F) -> StateResponse
where
    F: FnOnce(&mut TallyStore) -> bool,
{
    let mut store = state.store.lock().await;
    if mutate(&mut *store) {
        state.persist(&store).await;
    }
    to_response(&store, state)
}

fn to_response(store: &TallyStore, state: &AppState) -> StateResponse {
    let tally = store.tally();
    let language = store.language();
    StateResponse {
        selected_category: tally.selected_category,
        language,
        current_count: store.current_count(),
        categories: tally
            .totals
            .iter()
            .map(|(category, total)| CategoryPoint {
                category,
                label: category_label(language, category).to_string(),
                total,
                current: tally.current.get(category),
            })
            .collect(),
        load_error: state.load_issue.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LoadIssue;
    use std::path::PathBuf;

    fn unwritable_path() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("dhikr_missing_dir_{}_{}", std::process::id(), nanos));
        path.push("state.json");
        path
    }

    #[tokio::test]
    async fn failed_write_keeps_counting_in_memory() {
        let state = AppState::new(unwritable_path(), TallyStore::default(), None);

        let first = apply(&state, count_once).await;
        let second = apply(&state, count_once).await;

        assert_eq!(first.current_count, 1);
        assert_eq!(second.current_count, 2);
        assert!(!second.load_error);
        assert!(!state.data_path.exists());

        let store = state.store.lock().await;
        assert_eq!(store.tally().totals.get(Category::SubhanAllah), 2);
        assert_eq!(store.tally().current.get(Category::SubhanAllah), 2);
    }

    #[tokio::test]
    async fn state_reports_startup_load_failure() {
        let state = AppState::new(
            unwritable_path(),
            TallyStore::default(),
            Some(LoadIssue::Corrupt),
        );
        let response = apply(&state, |store| store.select_category("lahawla")).await;
        assert!(response.load_error);
        assert_eq!(response.categories.len(), Category::ALL.len());
        assert_eq!(response.categories[0].category, Category::SubhanAllah);
    }
}
