use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// A named tally bucket. Declaration order is the fixed enumeration order
/// used for display and for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    SubhanAllah,
    Alhamdulillah,
    AllahuAkbar,
    LaIlahaIllallah,
    Astaghfirullah,
    LaHawla,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::SubhanAllah,
        Category::Alhamdulillah,
        Category::AllahuAkbar,
        Category::LaIlahaIllallah,
        Category::Astaghfirullah,
        Category::LaHawla,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::SubhanAllah => "subhanallah",
            Category::Alhamdulillah => "alhamdulillah",
            Category::AllahuAkbar => "allahuakbar",
            Category::LaIlahaIllallah => "lailahaillallah",
            Category::Astaghfirullah => "astaghfirullah",
            Category::LaHawla => "lahawla",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::ALL[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
    Th,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ar, Language::En, Language::Th];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
            Language::Th => "th",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|language| language.code() == code)
    }

    /// Native name shown in the language picker.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Ar => "العربية",
            Language::En => "English",
            Language::Th => "ไทย",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

/// Per-category counters. Always holds an entry for every [`Category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts(BTreeMap<Category, u64>);

impl Default for CategoryCounts {
    fn default() -> Self {
        Self(Category::ALL.into_iter().map(|category| (category, 0)).collect())
    }
}

impl CategoryCounts {
    /// Builds counts from loosely keyed input. Unknown keys are dropped and
    /// missing categories start at zero.
    pub fn from_raw(raw: BTreeMap<String, u64>) -> Self {
        let mut counts = Self::default();
        for (key, value) in raw {
            if let Some(category) = Category::from_key(&key) {
                counts.set(category, value);
            }
        }
        counts
    }

    pub fn get(&self, category: Category) -> u64 {
        self.0.get(&category).copied().unwrap_or_default()
    }

    pub fn set(&mut self, category: Category, value: u64) {
        self.0.insert(category, value);
    }

    pub fn increment(&mut self, category: Category) -> u64 {
        let entry = self.0.entry(category).or_default();
        *entry = entry.saturating_add(1);
        *entry
    }

    pub fn sum(&self) -> u64 {
        self.0.values().fold(0u64, |acc, value| acc.saturating_add(*value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        self.0.iter().map(|(category, value)| (*category, *value))
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(category, value)| (category.key(), value)))
    }
}

impl<'de> Deserialize<'de> for CategoryCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<String, u64>::deserialize(deserializer).map(Self::from_raw)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyState {
    pub totals: CategoryCounts,
    pub current: CategoryCounts,
    pub selected_category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHistoryEntry {
    pub date: NaiveDate,
    pub count: u64,
}

/// Rolling per-day totals, ordered oldest to newest, one entry per date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyHistory(pub(crate) Vec<DailyHistoryEntry>);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreakState {
    pub first_use_date: Option<DateTime<Local>>,
    pub last_used_date: Option<DateTime<Local>>,
    pub current_streak: u64,
    pub longest_streak: u64,
    pub best_day_count: u64,
    pub best_day_date: Option<DateTime<Local>>,
}

/// The user's answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Confirmed,
    Declined,
}

impl From<bool> for Intent {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Intent::Confirmed
        } else {
            Intent::Declined
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveAction {
    ResetCurrent(Category),
    ClearAll,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub category: Option<String>,
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub category: Category,
    pub label: String,
    pub total: u64,
    pub current: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StateResponse {
    pub selected_category: Category,
    pub language: Language,
    pub current_count: u64,
    pub categories: Vec<CategoryPoint>,
    pub load_error: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    pub total: u64,
    pub current: u64,
    pub percentage: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_all: u64,
    pub current_all: u64,
    pub most_used_category: Category,
    pub max_count: u64,
    pub days_since_start: u64,
    pub daily_average: u64,
    pub weekly_average: u64,
    pub current_streak: u64,
    pub longest_streak: u64,
    pub best_day_count: u64,
    pub best_day_date: Option<NaiveDate>,
    pub categories: Vec<CategoryShare>,
}
