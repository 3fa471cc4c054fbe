use std::env;

use chrono::{DateTime, Local};

use crate::constants::{EMPTY_LIST_MSG, NO_SUGGESTIONS_MSG};
use crate::data_backend::history::rating_stars;
use crate::data_types::{Meal, ResolvedEntry};
use crate::shopping_list::ShoppingChecklist;
use crate::suggestion::SwipeDeck;

pub fn logger_init(module_path: &'static str) {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module(
            module_path,
            if env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default()
                == "debug"
            {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init();
}

pub fn date_fmt(date: DateTime<Local>) -> String {
    date.format("%Y/%m/%d").to_string()
}

pub fn meal_card_msg(meal: &Meal) -> String {
    let mut msg = format!("{}\n", meal.name);
    msg += &format!("  main: {}\n", meal.main_dish);
    msg += &format!("  sides: {}\n", meal.side_dishes.join(", "));
    msg += &format!(
        "  {} min, {}",
        meal.cooking_time,
        meal.difficulty.as_str().to_lowercase()
    );

    match meal.last_made {
        Some(date) => msg += &format!(", last made {}\n", date_fmt(date)),
        None => msg += ", never made\n",
    }
    msg
}

pub fn deck_msg(deck: &SwipeDeck) -> String {
    let Some(meal) = deck.current() else {
        return format!("{}\n", NO_SUGGESTIONS_MSG);
    };

    let (position, total) = deck.position();
    let mut msg = format!("[{} / {}] {}", position, total, meal_card_msg(meal));
    if let Some(next) = deck.peek_next() {
        msg += &format!("  up next: {}\n", next.name);
    }
    msg
}

pub fn history_msg(history: &[ResolvedEntry]) -> String {
    if history.is_empty() {
        return "No meals decided yet.\n".to_string();
    }

    let mut msg = String::new();
    for resolved in history {
        let (entry, meal) = (resolved.entry, resolved.meal);
        msg += &format!("{}  {}\n", date_fmt(entry.date), meal.name);
        msg += &format!(
            "  main: {} | sides: {}\n",
            meal.main_dish,
            meal.side_dishes.join(", ")
        );
        msg += &format!(
            "  {}  {} min\n",
            rating_stars(entry.rating),
            meal.cooking_time
        );
        if !entry.notes.is_empty() {
            msg += &format!("  note: {}\n", entry.notes);
        }
    }
    msg
}

pub fn shopping_msg(list: &ShoppingChecklist) -> String {
    let mut msg = String::new();
    if let Some(meal) = list.meal() {
        msg += &format!("Shopping for: {}\n", meal.name);
    }
    msg += &format!(
        "Done: {}% ({}/{})\n",
        list.completion_rate(),
        list.checked_count(),
        list.items().len()
    );

    if list.items().is_empty() {
        msg += EMPTY_LIST_MSG;
        msg.push('\n');
        return msg;
    }

    for group in list.groups() {
        msg += &format!("\n{}\n", group.category);
        for item in group.items {
            let mark = if list.is_checked(&item.id) { "x" } else { " " };
            msg += &format!(" [{}] {} ({})", mark, item.name, item.quantity);
            if item.essential {
                msg += " *";
            }
            msg.push('\n');
        }
    }
    msg
}
