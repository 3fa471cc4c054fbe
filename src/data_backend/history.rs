use std::collections::HashSet;

use chrono::{DateTime, Local};

use crate::constants::RATING_SLOTS;
use crate::data_backend::catalog::MealCatalog;
use crate::data_backend::next_id;
use crate::data_types::{EntryId, HistoryEntry, HistoryPatch, Meal, ResolvedEntry};
use crate::errors::StoreError;

/// Log of meal decisions. New entries go to the front; updates keep positions.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    seed: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from `entries`; [`HistoryLog::reset`] returns to them.
    /// A repeated id keeps its first entry only.
    pub fn seeded(entries: Vec<HistoryEntry>) -> Self {
        let mut seen = HashSet::new();
        let entries: Vec<HistoryEntry> = entries
            .into_iter()
            .filter(|entry| {
                let fresh = seen.insert(entry.id);
                if !fresh {
                    log::warn!(
                        "Dropping history entry for meal {}: id {} is taken",
                        entry.meal_id,
                        entry.id
                    );
                }
                fresh
            })
            .collect();

        HistoryLog {
            entries: entries.clone(),
            seed: entries,
        }
    }

    pub fn add(
        &mut self,
        meal: &Meal,
        rating: Option<u8>,
        notes: &str,
    ) -> Result<HistoryEntry, StoreError> {
        self.add_at(meal, rating, notes, Local::now())
    }

    pub fn add_at(
        &mut self,
        meal: &Meal,
        rating: Option<u8>,
        notes: &str,
        date: DateTime<Local>,
    ) -> Result<HistoryEntry, StoreError> {
        let entry = HistoryEntry {
            id: next_id(self.entries.iter().map(|entry| entry.id))?,
            meal_id: meal.id,
            date,
            rating,
            notes: notes.to_string(),
        };

        log::debug!("History add: {} for meal {}", entry.id, entry.meal_id);
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    pub fn update(&mut self, id: EntryId, patch: HistoryPatch) -> Result<HistoryEntry, StoreError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(StoreError::EntryNotFound(id))?;

        patch.apply_to(entry);
        Ok(entry.clone())
    }

    /// Raw storage order. Views should go through [`HistoryLog::list_resolved`].
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries joined with their meals, newest first. Entries whose meal was
    /// deleted are left out; equal dates keep their storage order.
    pub fn list_resolved<'a>(&'a self, catalog: &'a MealCatalog) -> Vec<ResolvedEntry<'a>> {
        let mut resolved: Vec<ResolvedEntry> = self
            .entries
            .iter()
            .filter_map(|entry| {
                catalog
                    .get(entry.meal_id)
                    .map(|meal| ResolvedEntry { entry, meal })
            })
            .collect();

        resolved.sort_by(|a, b| b.entry.date.cmp(&a.entry.date));
        resolved
    }

    pub fn reset(&mut self) {
        log::info!("History reset to {} seeded entries", self.seed.len());
        self.entries = self.seed.clone();
    }
}

pub fn rating_stars(rating: Option<u8>) -> String {
    let filled = usize::from(rating.unwrap_or(0)).min(RATING_SLOTS);
    "★".repeat(filled) + &"☆".repeat(RATING_SLOTS - filled)
}
