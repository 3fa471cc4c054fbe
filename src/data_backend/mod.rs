use chrono::{DateTime, Local};
use rand::Rng;

use crate::data_types::{Meal, ResolvedEntry};
use crate::errors::StoreError;
use crate::suggestion::select_candidates_with;

pub mod catalog;
pub mod history;
pub mod sample_meals;

use catalog::MealCatalog;
use history::HistoryLog;

/// Next free id: one above the highest in use, 1 for an empty collection.
fn next_id(ids: impl Iterator<Item = u32>) -> Result<u32, StoreError> {
    ids.max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(StoreError::IdSpaceExhausted)
}

/// Everything one session knows about meals. Nothing outlives the process.
#[derive(Debug, Clone, Default)]
pub struct MealStore {
    pub catalog: MealCatalog,
    pub history: HistoryLog,
}

impl MealStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_data() -> Self {
        let store = MealStore {
            catalog: MealCatalog::from_meals(sample_meals::sample_meals()),
            history: HistoryLog::seeded(sample_meals::sample_history()),
        };
        log::debug!(
            "Seeded {} meals, {} history entries",
            store.catalog.len(),
            store.history.entries().len()
        );
        store
    }

    pub fn suggest<R: Rng + ?Sized>(&self, now: DateTime<Local>, rng: &mut R) -> Vec<Meal> {
        select_candidates_with(self.catalog.list(), self.history.entries(), now, rng)
    }

    pub fn resolved_history(&self) -> Vec<ResolvedEntry<'_>> {
        self.history.list_resolved(&self.catalog)
    }
}
