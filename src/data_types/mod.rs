pub mod shopping_data_types;

use std::{fmt, str::FromStr};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::errors::{ParseDifficultyError, ValidationError};

pub type MealId = u32;
pub type EntryId = u32;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub main_dish: String,
    pub side_dishes: Vec<String>,
    pub ingredients: Vec<String>,
    /// minutes
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    /// `None` means the meal was never made
    pub last_made: Option<DateTime<Local>>,
}

/// Form input for a new catalog entry, not yet validated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MealDraft {
    pub name: String,
    pub main_dish: String,
    pub side_dishes: Vec<String>,
    pub ingredients: Vec<String>,
    pub cooking_time: i64,
    pub difficulty: Difficulty,
}

impl MealDraft {
    /// Trims text fields, drops blank list entries and checks that every
    /// required field is still present. The resulting meal was never made.
    pub fn into_meal(self, id: MealId) -> Result<Meal, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let main_dish = self.main_dish.trim();
        if main_dish.is_empty() {
            return Err(ValidationError::EmptyMainDish);
        }
        let cooking_time = u32::try_from(self.cooking_time)
            .ok()
            .filter(|minutes| *minutes > 0)
            .ok_or(ValidationError::InvalidCookingTime)?;

        let side_dishes = non_blank(self.side_dishes);
        if side_dishes.is_empty() {
            return Err(ValidationError::NoSideDishes);
        }
        let ingredients = non_blank(self.ingredients);
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients);
        }

        Ok(Meal {
            id,
            name: name.to_string(),
            main_dish: main_dish.to_string(),
            side_dishes,
            ingredients,
            cooking_time,
            difficulty: self.difficulty,
            last_made: None,
        })
    }
}

fn non_blank(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Parses the cooking time text field of the meal form.
pub fn parse_cooking_time(txt: &str) -> Result<u32, ValidationError> {
    let txt = txt.trim();
    if txt.is_empty() || !txt.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidCookingTime);
    }

    match txt.parse::<u32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(ValidationError::InvalidCookingTime),
    }
}

/// Partial update of a meal, `None` fields stay untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MealPatch {
    pub name: Option<String>,
    pub main_dish: Option<String>,
    pub side_dishes: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    pub cooking_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub last_made: Option<Option<DateTime<Local>>>,
}

impl MealPatch {
    pub fn apply_to(self, meal: &mut Meal) {
        if let Some(name) = self.name {
            meal.name = name;
        }
        if let Some(main_dish) = self.main_dish {
            meal.main_dish = main_dish;
        }
        if let Some(side_dishes) = self.side_dishes {
            meal.side_dishes = side_dishes;
        }
        if let Some(ingredients) = self.ingredients {
            meal.ingredients = ingredients;
        }
        if let Some(cooking_time) = self.cooking_time {
            meal.cooking_time = cooking_time;
        }
        if let Some(difficulty) = self.difficulty {
            meal.difficulty = difficulty;
        }
        if let Some(last_made) = self.last_made {
            meal.last_made = last_made;
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub meal_id: MealId,
    pub date: DateTime<Local>,
    /// 1..=5 by convention, not enforced
    pub rating: Option<u8>,
    pub notes: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct HistoryPatch {
    pub date: Option<DateTime<Local>>,
    pub rating: Option<Option<u8>>,
    pub notes: Option<String>,
}

impl HistoryPatch {
    pub fn apply_to(self, entry: &mut HistoryEntry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(rating) = self.rating {
            entry.rating = rating;
        }
        if let Some(notes) = self.notes {
            entry.notes = notes;
        }
    }
}

/// A history entry joined with the meal it points to.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ResolvedEntry<'a> {
    pub entry: &'a HistoryEntry,
    pub meal: &'a Meal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MealDraft {
        MealDraft {
            name: "  カレーライス ".to_string(),
            main_dish: "カレー".to_string(),
            side_dishes: vec!["ご飯".to_string(), "  ".to_string()],
            ingredients: vec!["".to_string(), "カレールー".to_string(), " 玉ねぎ".to_string()],
            cooking_time: 45,
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn draft_is_trimmed_and_blanks_dropped() {
        let meal = draft().into_meal(7).unwrap();

        assert_eq!(meal.id, 7);
        assert_eq!(meal.name, "カレーライス");
        assert_eq!(meal.side_dishes, vec!["ご飯"]);
        assert_eq!(meal.ingredients, vec!["カレールー", "玉ねぎ"]);
        assert_eq!(meal.cooking_time, 45);
        assert!(meal.last_made.is_none());
    }

    #[test]
    fn draft_rejects_missing_fields() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert_eq!(d.into_meal(1), Err(ValidationError::EmptyName));

        let mut d = draft();
        d.main_dish = String::new();
        assert_eq!(d.into_meal(1), Err(ValidationError::EmptyMainDish));

        let mut d = draft();
        d.side_dishes = vec![" ".to_string()];
        assert_eq!(d.into_meal(1), Err(ValidationError::NoSideDishes));

        let mut d = draft();
        d.ingredients = Vec::new();
        assert_eq!(d.into_meal(1), Err(ValidationError::NoIngredients));
    }

    #[test]
    fn draft_rejects_non_positive_cooking_time() {
        for minutes in [0, -5] {
            let mut d = draft();
            d.cooking_time = minutes;
            assert_eq!(d.into_meal(1), Err(ValidationError::InvalidCookingTime));
        }
    }

    #[test]
    fn cooking_time_text_must_be_a_positive_number() {
        assert_eq!(parse_cooking_time(" 30 "), Ok(30));
        for bad in ["0", "-5", "abc", "30min", ""] {
            assert_eq!(
                parse_cooking_time(bad),
                Err(ValidationError::InvalidCookingTime),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn patch_overlays_only_given_fields() {
        let mut meal = draft().into_meal(1).unwrap();
        MealPatch {
            cooking_time: Some(50),
            difficulty: Some(Difficulty::Hard),
            ..Default::default()
        }
        .apply_to(&mut meal);

        assert_eq!(meal.cooking_time, 50);
        assert_eq!(meal.difficulty, Difficulty::Hard);
        assert_eq!(meal.name, "カレーライス");
    }

    #[test]
    fn difficulty_parses_case_insensitive() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }
}
