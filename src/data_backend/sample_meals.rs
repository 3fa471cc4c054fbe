use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::data_types::{Difficulty, HistoryEntry, Meal};

/// Midnight UTC of an ISO date, shown in local time.
fn seed_date(iso: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0));

    if naive.is_none() {
        log::warn!("Seed date '{}' is not a YYYY-MM-DD date, leaving it out", iso);
    }
    naive.map(|naive| Local.from_utc_datetime(&naive))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn sample_meals() -> Vec<Meal> {
    vec![
        Meal {
            id: 1,
            name: "ハンバーグ定食".to_string(),
            main_dish: "ハンバーグ".to_string(),
            side_dishes: strings(&["サラダ", "味噌汁", "ご飯"]),
            ingredients: strings(&[
                "牛ひき肉", "玉ねぎ", "卵", "パン粉", "レタス", "トマト", "味噌", "豆腐",
            ]),
            cooking_time: 30,
            difficulty: Difficulty::Normal,
            last_made: None,
        },
        Meal {
            id: 2,
            name: "カレーライス".to_string(),
            main_dish: "カレー".to_string(),
            side_dishes: strings(&["ご飯", "福神漬け"]),
            ingredients: strings(&["カレールー", "じゃがいも", "にんじん", "玉ねぎ", "牛肉", "ご飯"]),
            cooking_time: 45,
            difficulty: Difficulty::Easy,
            last_made: seed_date("2024-06-20"),
        },
        Meal {
            id: 3,
            name: "鶏の唐揚げ定食".to_string(),
            main_dish: "鶏の唐揚げ".to_string(),
            side_dishes: strings(&["キャベツの千切り", "味噌汁", "ご飯"]),
            ingredients: strings(&["鶏もも肉", "醤油", "酒", "にんにく", "生姜", "片栗粉", "キャベツ"]),
            cooking_time: 25,
            difficulty: Difficulty::Normal,
            last_made: seed_date("2024-06-25"),
        },
        Meal {
            id: 4,
            name: "パスタセット".to_string(),
            main_dish: "ミートソースパスタ".to_string(),
            side_dishes: strings(&["サラダ", "ガーリックブレッド"]),
            ingredients: strings(&["パスタ", "牛ひき肉", "トマト缶", "玉ねぎ", "にんにく", "レタス", "食パン"]),
            cooking_time: 20,
            difficulty: Difficulty::Easy,
            last_made: seed_date("2024-06-28"),
        },
        Meal {
            id: 5,
            name: "魚の煮付け定食".to_string(),
            main_dish: "さばの煮付け".to_string(),
            side_dishes: strings(&["小松菜のお浸し", "味噌汁", "ご飯"]),
            ingredients: strings(&["さば", "醤油", "みりん", "砂糖", "生姜", "小松菜", "ご飯"]),
            cooking_time: 35,
            difficulty: Difficulty::Normal,
            last_made: seed_date("2024-06-22"),
        },
    ]
}

pub fn sample_history() -> Vec<HistoryEntry> {
    let seed = [
        (1, 2, "2024-06-20", 4, "子供たちに好評だった"),
        (2, 5, "2024-06-22", 3, "少し味が濃かった"),
        (3, 3, "2024-06-25", 5, "完璧な仕上がり"),
        (4, 4, "2024-06-28", 4, "簡単で美味しい"),
    ];

    seed.into_iter()
        .filter_map(|(id, meal_id, date, rating, notes)| {
            Some(HistoryEntry {
                id,
                meal_id,
                date: seed_date(date)?,
                rating: Some(rating),
                notes: notes.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_dates_parse() {
        assert!(seed_date("2024-06-20").is_some());
        assert!(seed_date("June 20th").is_none());
        assert!(seed_date("2024-02-30").is_none());
        assert_eq!(sample_history().len(), 4);
    }

    #[test]
    fn every_sample_date_is_kept() {
        let dated = sample_meals()
            .iter()
            .filter(|meal| meal.last_made.is_some())
            .count();
        assert_eq!(dated, 4);
        assert!(sample_history().iter().all(|entry| entry.rating.is_some()));
    }

    #[test]
    fn sample_ids_are_unique_and_history_resolves() {
        let meals = sample_meals();
        let ids: HashSet<_> = meals.iter().map(|meal| meal.id).collect();
        assert_eq!(ids.len(), meals.len());

        for entry in sample_history() {
            assert!(ids.contains(&entry.meal_id));
        }
    }
}
