use crate::models::{
    Category, DailyHistory, DestructiveAction, Intent, Language, StatsResponse, StreakState,
    TallyState,
};
use crate::stats::{compute_statistics_at, record_activity};
use chrono::{DateTime, Local, NaiveDate};
use tracing::{debug, info, warn};

/// Owns every piece of counter state. All mutation goes through these
/// methods, and each method leaves the state consistent so any snapshot
/// taken afterwards can be persisted as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TallyStore {
    tally: TallyState,
    language: Language,
    streak: StreakState,
    history: DailyHistory,
}

impl TallyStore {
    pub fn from_parts(
        tally: TallyState,
        language: Language,
        streak: StreakState,
        history: DailyHistory,
    ) -> Self {
        Self {
            tally,
            language,
            streak,
            history,
        }
    }

    pub fn tally(&self) -> &TallyState {
        &self.tally
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn streak(&self) -> &StreakState {
        &self.streak
    }

    pub fn history(&self) -> &DailyHistory {
        &self.history
    }

    pub fn selected_category(&self) -> Category {
        self.tally.selected_category
    }

    pub fn current_count(&self) -> u64 {
        self.tally.current.get(self.tally.selected_category)
    }

    /// Returns `false` and leaves the selection alone for unknown keys.
    pub fn select_category(&mut self, key: &str) -> bool {
        match Category::from_key(key) {
            Some(category) => {
                self.tally.selected_category = category;
                true
            }
            None => {
                warn!(key, "ignoring unknown category");
                false
            }
        }
    }

    pub fn increment(&mut self) -> u64 {
        self.increment_at(Local::now())
    }

    /// Counts one tap on the active category and returns its new current
    /// count.
    pub fn increment_at(&mut self, now: DateTime<Local>) -> u64 {
        let category = self.tally.selected_category;
        let current = self.tally.current.increment(category);
        self.tally.totals.increment(category);

        let today_total = self.tally.current.sum();
        record_activity(&mut self.streak, &mut self.history, now, today_total);
        debug!(category = category.key(), current, today_total, "incremented");
        current
    }

    pub fn reset_current(&mut self, category: Category, intent: Intent) -> bool {
        if intent == Intent::Declined {
            debug!(?category, "reset declined");
            return false;
        }
        self.tally.current.set(category, 0);
        info!(category = category.key(), "current count reset");
        true
    }

    /// Zeroes every counter and forgets streak and history. Language and
    /// selection survive.
    pub fn clear_all(&mut self, intent: Intent) -> bool {
        if intent == Intent::Declined {
            debug!("clear declined");
            return false;
        }
        let selected_category = self.tally.selected_category;
        self.tally = TallyState {
            selected_category,
            ..TallyState::default()
        };
        self.streak = StreakState::default();
        self.history = DailyHistory::default();
        info!("all data cleared");
        true
    }

    pub fn apply(&mut self, action: DestructiveAction, intent: Intent) -> bool {
        match action {
            DestructiveAction::ResetCurrent(category) => self.reset_current(category, intent),
            DestructiveAction::ClearAll => self.clear_all(intent),
        }
    }

    pub fn set_language(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(language) => {
                self.language = language;
                true
            }
            None => {
                warn!(code, "ignoring unsupported language");
                false
            }
        }
    }

    pub fn statistics(&self) -> StatsResponse {
        self.statistics_at(Local::now().date_naive())
    }

    pub fn statistics_at(&self, today: NaiveDate) -> StatsResponse {
        compute_statistics_at(today, &self.tally, &self.streak, &self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 1, day, 9, 30, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn increments_current_and_total_together() {
        let mut store = TallyStore::default();
        store.tally.totals.set(Category::SubhanAllah, 10);

        for _ in 0..5 {
            store.increment_at(at(1));
        }

        assert_eq!(store.tally().current.get(Category::SubhanAllah), 5);
        assert_eq!(store.tally().totals.get(Category::SubhanAllah), 15);
        assert_eq!(store.current_count(), 5);
    }

    #[test]
    fn switching_category_keeps_each_current_count() {
        let mut store = TallyStore::default();
        store.increment_at(at(1));
        store.increment_at(at(1));
        assert!(store.select_category("astaghfirullah"));
        store.increment_at(at(1));

        assert_eq!(store.selected_category(), Category::Astaghfirullah);
        assert_eq!(store.current_count(), 1);
        assert_eq!(store.tally().current.get(Category::SubhanAllah), 2);
    }

    #[test]
    fn unknown_category_is_ignored() {
        let mut store = TallyStore::default();
        store.select_category("lahawla");
        assert!(!store.select_category("not-a-category"));
        assert_eq!(store.selected_category(), Category::LaHawla);
    }

    #[test]
    fn reset_touches_only_one_current_count() {
        let mut store = TallyStore::default();
        store.increment_at(at(1));
        store.select_category("alhamdulillah");
        store.increment_at(at(1));
        store.increment_at(at(1));
        let before = store.clone();

        assert!(!store.reset_current(Category::Alhamdulillah, Intent::Declined));
        assert_eq!(store, before);

        assert!(store.reset_current(Category::Alhamdulillah, Intent::Confirmed));
        assert_eq!(store.tally().current.get(Category::Alhamdulillah), 0);
        assert_eq!(store.tally().totals.get(Category::Alhamdulillah), 2);
        assert_eq!(store.tally().current.get(Category::SubhanAllah), 1);
        assert_eq!(store.tally().totals.get(Category::SubhanAllah), 1);
    }

    #[test]
    fn clear_all_returns_to_initial_counters() {
        let mut store = TallyStore::default();
        store.set_language("th");
        store.increment_at(at(1));
        store.increment_at(at(2));

        assert!(!store.apply(DestructiveAction::ClearAll, Intent::Declined));
        assert_eq!(store.tally().totals.sum(), 2);

        assert!(store.apply(DestructiveAction::ClearAll, Intent::Confirmed));
        assert_eq!(store.tally().totals.sum(), 0);
        assert_eq!(store.tally().current.sum(), 0);
        assert_eq!(store.streak(), &StreakState::default());
        assert!(store.history().entries().is_empty());
        assert_eq!(store.language(), Language::Th);
    }

    #[test]
    fn today_total_is_sampled_after_increment() {
        let mut store = TallyStore::default();
        store.increment_at(at(3));
        store.select_category("allahuakbar");
        store.increment_at(at(3));

        let today = at(3).date_naive();
        assert_eq!(store.history().get(today), Some(2));
        assert_eq!(store.streak().best_day_count, 2);
    }

    #[test]
    fn streak_scenario_through_store() {
        let mut store = TallyStore::default();
        store.increment_at(at(1));
        assert_eq!(store.streak().current_streak, 1);
        store.increment_at(at(1));
        assert_eq!(store.streak().current_streak, 1);
        store.increment_at(at(2));
        assert_eq!(store.streak().current_streak, 2);
        assert_eq!(store.streak().longest_streak, 2);
        store.increment_at(at(4));
        assert_eq!(store.streak().current_streak, 1);
        assert_eq!(store.streak().longest_streak, 2);

        let stats = store.statistics_at(at(4).date_naive());
        assert_eq!(stats.total_all, 4);
        assert_eq!(stats.days_since_start, 3);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn language_accepts_only_supported_codes() {
        let mut store = TallyStore::default();
        assert!(store.set_language("en"));
        assert!(!store.set_language("fr"));
        assert_eq!(store.language(), Language::En);
    }
}
