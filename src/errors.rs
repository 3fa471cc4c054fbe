use thiserror::Error;

use crate::data_types::{EntryId, MealId};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("meal name must not be empty")]
    EmptyName,
    #[error("main dish must not be empty")]
    EmptyMainDish,
    #[error("cooking time must be a positive number of minutes")]
    InvalidCookingTime,
    #[error("at least one side dish is required")]
    NoSideDishes,
    #[error("at least one ingredient is required")]
    NoIngredients,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no meal with id {0}")]
    MealNotFound(MealId),
    #[error("no history entry with id {0}")]
    EntryNotFound(EntryId),
    #[error("all ids are taken")]
    IdSpaceExhausted,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    #[error("a swipe is still in progress")]
    Busy,
    #[error("no suggestions left")]
    Exhausted,
    #[error("a meal has already been chosen")]
    Closed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty '{0}', expected easy, normal or hard")]
pub struct ParseDifficultyError(pub String);
