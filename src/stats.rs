use crate::models::{
    Category, CategoryShare, DailyHistory, DailyHistoryEntry, StatsResponse, StreakState,
    TallyState,
};
use chrono::{DateTime, Local, NaiveDate};
use tracing::debug;

pub const HISTORY_DAYS: usize = 30;
const WEEK_DAYS: usize = 7;

impl DailyHistory {
    pub fn entries(&self) -> &[DailyHistoryEntry] {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn get(&self, date: NaiveDate) -> Option<u64> {
        self.0
            .binary_search_by_key(&date, |entry| entry.date)
            .ok()
            .map(|index| self.0[index].count)
    }

    /// Writes the count for `date`, keeping one entry per date in date order
    /// and evicting the oldest beyond [`HISTORY_DAYS`].
    pub fn upsert(&mut self, date: NaiveDate, count: u64) {
        match self.0.binary_search_by_key(&date, |entry| entry.date) {
            Ok(index) => self.0[index].count = count,
            Err(index) => self.0.insert(index, DailyHistoryEntry { date, count }),
        }
        self.evict_oldest();
    }

    /// Restores ordering and bounds on history read back from storage.
    pub fn normalize(&mut self) {
        self.0.sort_by_key(|entry| entry.date);
        self.0.dedup_by_key(|entry| entry.date);
        self.evict_oldest();
    }

    fn recent(&self, days: usize) -> &[DailyHistoryEntry] {
        &self.0[self.0.len().saturating_sub(days)..]
    }

    fn evict_oldest(&mut self) {
        if self.0.len() > HISTORY_DAYS {
            let excess = self.0.len() - HISTORY_DAYS;
            self.0.drain(..excess);
        }
    }
}

pub fn compute_statistics_at(
    today: NaiveDate,
    tally: &TallyState,
    streak: &StreakState,
    history: &DailyHistory,
) -> StatsResponse {
    let total_all = tally.totals.sum();
    let current_all = tally.current.sum();

    let mut most_used_category = Category::ALL[0];
    let mut max_count = tally.totals.get(most_used_category);
    for category in Category::ALL {
        let total = tally.totals.get(category);
        if total > max_count {
            max_count = total;
            most_used_category = category;
        }
    }

    let days_since_start = streak
        .first_use_date
        .map(|first| (today - first.date_naive()).num_days())
        .unwrap_or_default()
        .max(1) as u64;

    let recent = history.recent(WEEK_DAYS);
    let weekly_average = if recent.is_empty() {
        0
    } else {
        let sum = recent
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.count));
        rounded_ratio(sum, recent.len() as u64)
    };

    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            let total = tally.totals.get(category);
            CategoryShare {
                category,
                total,
                current: tally.current.get(category),
                percentage: if total_all == 0 {
                    0
                } else {
                    rounded_ratio(total.saturating_mul(100), total_all)
                },
            }
        })
        .collect();

    StatsResponse {
        total_all,
        current_all,
        most_used_category,
        max_count,
        days_since_start,
        daily_average: rounded_ratio(total_all, days_since_start),
        weekly_average,
        current_streak: streak.current_streak,
        longest_streak: streak.longest_streak,
        best_day_count: streak.best_day_count,
        best_day_date: streak.best_day_date.map(|date| date.date_naive()),
        categories,
    }
}

/// Applies one increment's worth of bookkeeping: streak transition,
/// today's history entry and the best-day record. `today_total` is the
/// session grand total after the increment was applied.
pub fn record_activity(
    streak: &mut StreakState,
    history: &mut DailyHistory,
    now: DateTime<Local>,
    today_total: u64,
) {
    let today = now.date_naive();

    if streak.first_use_date.is_none() {
        streak.first_use_date = Some(now);
    }

    match streak.last_used_date.map(|last| (today - last.date_naive()).num_days()) {
        None => {
            streak.current_streak = 1;
            streak.last_used_date = Some(now);
        }
        Some(0) => streak.last_used_date = Some(now),
        Some(1) => {
            streak.current_streak = streak.current_streak.saturating_add(1);
            streak.last_used_date = Some(now);
        }
        Some(days) if days > 1 => {
            debug!(days, "streak broken");
            streak.current_streak = 1;
            streak.last_used_date = Some(now);
        }
        Some(days) => {
            // Clock moved backward; leave the streak and last-used date alone.
            debug!(days, "ignoring negative day difference");
        }
    }
    streak.longest_streak = streak.longest_streak.max(streak.current_streak);

    history.upsert(today, today_total);

    if today_total > streak.best_day_count {
        streak.best_day_count = today_total;
        streak.best_day_date = Some(now);
    }
}

fn rounded_ratio(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64).round() as u64
}
