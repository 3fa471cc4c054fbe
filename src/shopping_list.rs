use std::collections::BTreeSet;

use chrono::{DateTime, Local};

use crate::constants::{CONFIRM_NOTE, CONFIRM_RATING, DEFAULT_QUANTITY};
use crate::data_backend::history::HistoryLog;
use crate::data_types::shopping_data_types::{CategoryGroup, IngredientCategory, ShoppingItem};
use crate::data_types::{HistoryEntry, Meal};
use crate::errors::StoreError;
use crate::ingredient_classifier::classify;

pub fn build_shopping_list(meal: Option<&Meal>) -> Vec<ShoppingItem> {
    let Some(meal) = meal else {
        return default_shopping_list();
    };

    meal.ingredients
        .iter()
        .enumerate()
        .map(|(index, ingredient)| ShoppingItem {
            id: format!("{}-{}", meal.id, index),
            name: ingredient.clone(),
            category: classify(ingredient),
            quantity: DEFAULT_QUANTITY.to_string(),
            essential: true,
        })
        .collect()
}

/// Starter list used when no meal was picked.
pub fn default_shopping_list() -> Vec<ShoppingItem> {
    [
        ("1", "牛乳", IngredientCategory::DairyAndEggs, "1 carton"),
        ("2", "卵", IngredientCategory::DairyAndEggs, "1 pack"),
        ("3", "食パン", IngredientCategory::GrainsAndBread, "1 loaf"),
        ("4", "玉ねぎ", IngredientCategory::Vegetables, "3"),
        ("5", "にんじん", IngredientCategory::Vegetables, "2"),
    ]
    .into_iter()
    .map(|(id, name, category, quantity)| ShoppingItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        quantity: quantity.to_string(),
        essential: false,
    })
    .collect()
}

/// Groups in order of first appearance, items keep their relative order.
pub fn group_by_category(items: &[ShoppingItem]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for item in items {
        if let Some(group) = groups.iter_mut().find(|g| g.category == item.category) {
            group.items.push(item);
        } else {
            groups.push(CategoryGroup {
                category: item.category,
                items: vec![item],
            });
        }
    }

    groups
}

/// Checked share of `items` in percent, rounded half up. Ids in `checked`
/// that belong to no item are not counted.
pub fn completion_rate(items: &[ShoppingItem], checked: &BTreeSet<String>) -> u8 {
    if items.is_empty() {
        return 0;
    }

    let total = items.len();
    let done = items.iter().filter(|item| checked.contains(&item.id)).count();

    // integer form of round(100 * done / total)
    ((200 * done + total) / (2 * total)) as u8
}

/// A built shopping list together with what has been ticked off.
#[derive(Debug, Clone, Default)]
pub struct ShoppingChecklist {
    meal: Option<Meal>,
    items: Vec<ShoppingItem>,
    checked: BTreeSet<String>,
}

impl ShoppingChecklist {
    pub fn for_meal(meal: Option<&Meal>) -> Self {
        ShoppingChecklist {
            meal: meal.cloned(),
            items: build_shopping_list(meal),
            checked: BTreeSet::new(),
        }
    }

    pub fn meal(&self) -> Option<&Meal> {
        self.meal.as_ref()
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Flips the checked state, returns the new state. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            log::warn!("'{}' is not on the list", id);
            return false;
        }

        if self.checked.remove(id) {
            false
        } else {
            self.checked.insert(id.to_string());
            true
        }
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    pub fn completion_rate(&self) -> u8 {
        completion_rate(&self.items, &self.checked)
    }

    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        group_by_category(&self.items)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.checked.clear();
    }

    /// Records the meal of this list as decided. The default list has no
    /// meal and records nothing.
    pub fn confirm(
        &self,
        history: &mut HistoryLog,
        now: DateTime<Local>,
    ) -> Result<Option<HistoryEntry>, StoreError> {
        self.meal
            .as_ref()
            .map(|meal| history.add_at(meal, Some(CONFIRM_RATING), CONFIRM_NOTE, now))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_backend::catalog::MealCatalog;
    use crate::data_types::Difficulty;
    use chrono::TimeZone;

    fn hamburg() -> Meal {
        Meal {
            id: 1,
            name: "ハンバーグ定食".to_string(),
            main_dish: "ハンバーグ".to_string(),
            side_dishes: vec!["サラダ".to_string()],
            ingredients: ["牛ひき肉", "玉ねぎ", "卵", "パン粉", "レタス", "豆腐"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            cooking_time: 30,
            difficulty: Difficulty::Normal,
            last_made: None,
        }
    }

    fn checked(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn meal_list_keeps_ingredient_order() {
        let items = build_shopping_list(Some(&hamburg()));

        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1-0", "1-1", "1-2", "1-3", "1-4", "1-5"]);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, hamburg().ingredients);

        assert!(items.iter().all(|i| i.essential && i.quantity == "as needed"));
        assert_eq!(items[0].category, IngredientCategory::Meat);
        assert_eq!(items[2].category, IngredientCategory::DairyAndEggs);
    }

    #[test]
    fn no_meal_gives_the_starter_list() {
        let items = build_shopping_list(None);

        assert_eq!(items, default_shopping_list());
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert!(items.iter().all(|i| !i.essential));
    }

    #[test]
    fn groups_follow_first_appearance() {
        let items = build_shopping_list(Some(&hamburg()));
        let groups = group_by_category(&items);

        let order: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            order,
            vec![
                IngredientCategory::Meat,
                IngredientCategory::Vegetables,
                IngredientCategory::DairyAndEggs,
                IngredientCategory::GrainsAndBread,
                IngredientCategory::Other,
            ]
        );
        let vegetables: Vec<_> = groups[1].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(vegetables, vec!["1-1", "1-4"]);
    }

    #[test]
    fn completion_rates() {
        assert_eq!(completion_rate(&[], &BTreeSet::new()), 0);

        let full = build_shopping_list(Some(&hamburg()));
        let items = &full[..4];
        assert_eq!(completion_rate(items, &checked(&["1-0", "1-3"])), 50);
        assert_eq!(completion_rate(items, &checked(&["1-0", "1-1", "1-2", "1-3"])), 100);
        // ids outside the list do not count
        assert_eq!(completion_rate(items, &checked(&["1-0", "9-9"])), 25);

        // 1 of 8 is 12.5, rounded up
        let eight: Vec<_> = build_shopping_list(None)
            .into_iter()
            .chain(build_shopping_list(Some(&hamburg())).into_iter().take(3))
            .collect();
        assert_eq!(completion_rate(&eight, &checked(&["1"])), 13);
        // 1 of 3 is 33.3
        assert_eq!(completion_rate(&eight[..3], &checked(&["1"])), 33);
    }

    #[test]
    fn checklist_toggle_and_clear() {
        let mut list = ShoppingChecklist::for_meal(None);

        assert!(list.toggle("2"));
        assert!(list.is_checked("2"));
        assert_eq!(list.completion_rate(), 20);
        assert!(!list.toggle("2"));
        assert_eq!(list.checked_count(), 0);
        assert!(!list.toggle("missing"));
        assert!(!list.is_checked("missing"));
        assert_eq!(list.checked_count(), 0);

        list.toggle("1");
        list.clear();
        assert!(list.items().is_empty());
        assert_eq!(list.completion_rate(), 0);
    }

    #[test]
    fn confirm_records_the_meal() {
        let meal = hamburg();
        let catalog = MealCatalog::from_meals(vec![meal.clone()]);
        let mut history = HistoryLog::new();
        let now = Local.with_ymd_and_hms(2024, 7, 1, 19, 0, 0).unwrap();

        let list = ShoppingChecklist::for_meal(Some(&meal));
        let entry = list.confirm(&mut history, now).unwrap().unwrap();
        assert_eq!(entry.meal_id, 1);
        assert_eq!(entry.rating, Some(4));
        assert_eq!(entry.notes, "added from shopping list");

        let resolved = history.list_resolved(&catalog);
        assert_eq!(resolved[0].entry, &entry);

        let default_list = ShoppingChecklist::for_meal(None);
        assert_eq!(default_list.confirm(&mut history, now), Ok(None));
        assert_eq!(history.entries().len(), 1);
    }
}
