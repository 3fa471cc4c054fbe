use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IngredientCategory {
    Meat,
    Vegetables,
    Seasonings,
    Seafood,
    #[serde(rename = "Dairy & Eggs")]
    DairyAndEggs,
    #[serde(rename = "Grains & Bread")]
    GrainsAndBread,
    #[serde(rename = "Canned & Processed")]
    CannedAndProcessed,
    Other,
}

impl IngredientCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientCategory::Meat => "Meat",
            IngredientCategory::Vegetables => "Vegetables",
            IngredientCategory::Seasonings => "Seasonings",
            IngredientCategory::Seafood => "Seafood",
            IngredientCategory::DairyAndEggs => "Dairy & Eggs",
            IngredientCategory::GrainsAndBread => "Grains & Bread",
            IngredientCategory::CannedAndProcessed => "Canned & Processed",
            IngredientCategory::Other => "Other",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub category: IngredientCategory,
    pub quantity: String,
    pub essential: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: IngredientCategory,
    pub items: Vec<&'a ShoppingItem>,
}
