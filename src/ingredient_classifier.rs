use crate::data_types::shopping_data_types::IngredientCategory;

// first match wins, so the order of rows matters:
// "トマト缶" lands in Vegetables because "トマト" is checked before canned goods
const CATEGORY_KEYWORDS: [(IngredientCategory, &[&str]); 8] = [
    (
        IngredientCategory::Meat,
        &["牛肉", "豚肉", "鶏肉", "牛ひき肉", "鶏もも肉"],
    ),
    (
        IngredientCategory::Vegetables,
        &["玉ねぎ", "にんじん", "じゃがいも", "キャベツ", "レタス", "トマト", "小松菜"],
    ),
    (
        IngredientCategory::Seasonings,
        &["醤油", "みりん", "砂糖", "酒", "味噌", "カレールー"],
    ),
    (IngredientCategory::Seafood, &["さば", "魚"]),
    (IngredientCategory::DairyAndEggs, &["卵"]),
    (
        IngredientCategory::GrainsAndBread,
        &["ご飯", "パスタ", "食パン", "パン粉"],
    ),
    (
        IngredientCategory::CannedAndProcessed,
        &["トマト缶", "福神漬け"],
    ),
    (
        IngredientCategory::Other,
        &["豆腐", "にんにく", "生姜", "片栗粉"],
    ),
];

/// Maps an ingredient name to the first category with a keyword contained in it.
pub fn classify(ingredient: &str) -> IngredientCategory {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| ingredient.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(IngredientCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_contained_keyword() {
        assert_eq!(classify("牛ひき肉"), IngredientCategory::Meat);
        assert_eq!(classify("国産牛肉 300g"), IngredientCategory::Meat);
        assert_eq!(classify("小松菜"), IngredientCategory::Vegetables);
        assert_eq!(classify("さば"), IngredientCategory::Seafood);
        assert_eq!(classify("卵"), IngredientCategory::DairyAndEggs);
        assert_eq!(classify("福神漬け"), IngredientCategory::CannedAndProcessed);
    }

    #[test]
    fn earlier_rows_win() {
        // "トマト" (vegetables) is listed before "トマト缶" (canned)
        assert_eq!(classify("トマト缶"), IngredientCategory::Vegetables);
        // "ご飯" would be grains, "酒" seasonings comes first
        assert_eq!(classify("酒ご飯"), IngredientCategory::Seasonings);
    }

    #[test]
    fn unknown_is_other() {
        assert_eq!(classify("unknown-item"), IngredientCategory::Other);
        assert_eq!(classify(""), IngredientCategory::Other);
        assert_eq!(classify("にんにく"), IngredientCategory::Other);
    }
}
