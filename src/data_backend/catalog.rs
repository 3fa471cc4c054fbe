use std::collections::HashSet;

use crate::data_backend::next_id;
use crate::data_types::{Meal, MealDraft, MealId, MealPatch};
use crate::errors::StoreError;

/// The known meals, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MealCatalog {
    meals: Vec<Meal>,
}

impl MealCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes over existing records. A repeated id keeps its first record only.
    pub fn from_meals(meals: Vec<Meal>) -> Self {
        let mut seen = HashSet::new();
        let meals = meals
            .into_iter()
            .filter(|meal| {
                let fresh = seen.insert(meal.id);
                if !fresh {
                    log::warn!("Dropping meal '{}': id {} is taken", meal.name, meal.id);
                }
                fresh
            })
            .collect();

        MealCatalog { meals }
    }

    pub fn add(&mut self, draft: MealDraft) -> Result<Meal, StoreError> {
        let id = next_id(self.meals.iter().map(|meal| meal.id))?;
        let meal = draft.into_meal(id)?;

        log::debug!("Catalog add: {} '{}'", meal.id, meal.name);
        self.meals.push(meal.clone());
        Ok(meal)
    }

    pub fn update(&mut self, id: MealId, patch: MealPatch) -> Result<Meal, StoreError> {
        let meal = self
            .meals
            .iter_mut()
            .find(|meal| meal.id == id)
            .ok_or(StoreError::MealNotFound(id))?;

        patch.apply_to(meal);
        log::debug!("Catalog update: {} '{}'", meal.id, meal.name);
        Ok(meal.clone())
    }

    pub fn delete(&mut self, id: MealId) -> Result<Meal, StoreError> {
        let index = self
            .meals
            .iter()
            .position(|meal| meal.id == id)
            .ok_or(StoreError::MealNotFound(id))?;

        let meal = self.meals.remove(index);
        log::debug!("Catalog delete: {} '{}'", meal.id, meal.name);
        Ok(meal)
    }

    pub fn list(&self) -> &[Meal] {
        &self.meals
    }

    pub fn get(&self, id: MealId) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
