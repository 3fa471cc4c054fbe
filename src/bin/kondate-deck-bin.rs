use kondate_deck::constants::NO_SUGGESTIONS_MSG;
use kondate_deck::data_backend::MealStore;
use kondate_deck::data_types::{parse_cooking_time, Difficulty, MealDraft, MealId};
use kondate_deck::errors::StoreError;
use kondate_deck::ingredient_classifier::classify;
use kondate_deck::shared_main::{
    deck_msg, history_msg, logger_init, meal_card_msg, shopping_msg,
};
use kondate_deck::shopping_list::ShoppingChecklist;
use kondate_deck::suggestion::{SwipeAction, SwipeDeck, SwipeOutcome};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use log::log_enabled;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;

/// Decide what to cook tonight: swipe through meal suggestions, get the
/// shopping list for the one you pick.
/// {n}State lives for one run only, every run starts from the sample catalog.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Enable verbose logging{n}[SETS env: RUST_LOG=debug]
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Pretend it is this point in time{n}Example: 2024-07-10T18:00:00+09:00
    #[arg(long, env = "KONDATE_NOW", global = true)]
    now: Option<String>,
    /// Seed for shuffling the suggestions
    #[arg(long, env = "KONDATE_SEED", global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List the meal catalog
    Meals,
    /// Show decided meals, newest first
    History,
    /// Swipe through suggestions and accept one
    Suggest {
        /// Number of cards to pass on before accepting
        #[arg(short, long, default_value_t = 0)]
        pass: usize,
        /// Record the accepted meal in the history
        #[arg(short, long)]
        confirm: bool,
    },
    /// Show a shopping list, the starter list without --meal
    Shopping {
        #[arg(short, long)]
        meal: Option<MealId>,
        /// Item id to tick off, repeatable
        #[arg(short, long)]
        check: Vec<String>,
    },
    /// Show the shopping category of ingredient names
    Classify {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Add a meal to this run's catalog
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        main_dish: String,
        /// repeatable
        #[arg(long = "side")]
        side_dishes: Vec<String>,
        /// repeatable
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// minutes
        #[arg(long)]
        cooking_time: String,
        /// easy, normal or hard
        #[arg(long, default_value = "normal")]
        difficulty: Difficulty,
    },
    /// Delete a meal; its history entries drop out of the history view
    Delete { id: MealId },
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    logger_init(module_path!());

    if !(log_enabled!(log::Level::Debug) || log_enabled!(log::Level::Trace)) {
        log::info!("Enable verbose logging for store details");
    }

    let now = match &args.now {
        Some(txt) => DateTime::parse_from_rfc3339(txt)
            .with_context(|| format!("--now '{}' is not an RFC 3339 timestamp", txt))?
            .with_timezone(&Local),
        None => Local::now(),
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut store = MealStore::with_sample_data();

    match args.command {
        Cmd::Meals => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(store.catalog.list())?);
            } else {
                for meal in store.catalog.list() {
                    print!("#{} {}", meal.id, meal_card_msg(meal));
                }
            }
        }
        Cmd::History => print_history(&store, args.json)?,
        Cmd::Suggest { pass, confirm } => {
            let mut deck = SwipeDeck::new(store.suggest(now, &mut rng));

            for _ in 0..pass {
                if !args.json {
                    print!("{}", deck_msg(&deck));
                    println!("  -> pass\n");
                }
                if deck.swipe(SwipeAction::Reject)? == SwipeOutcome::Exhausted {
                    break;
                }
            }

            if deck.is_exhausted() {
                if args.json {
                    println!("{}", json!({ "accepted": null }));
                } else {
                    println!("{}", NO_SUGGESTIONS_MSG);
                }
                return Ok(());
            }

            if !args.json {
                print!("{}", deck_msg(&deck));
                println!("  -> take it\n");
            }
            let SwipeOutcome::Accepted(meal) = deck.swipe(SwipeAction::Accept)? else {
                bail!("swipe deck did not hand out the accepted meal");
            };

            let list = ShoppingChecklist::for_meal(Some(&meal));
            let entry = if confirm {
                list.confirm(&mut store.history, now)
                    .context("meal not recorded")?
            } else {
                None
            };

            if args.json {
                let out = json!({
                    "accepted": meal,
                    "shopping_list": list.groups(),
                    "history_entry": entry,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", shopping_msg(&list));
                if entry.is_some() {
                    println!();
                    print!("{}", history_msg(&store.resolved_history()));
                }
            }
        }
        Cmd::Shopping { meal, check } => {
            let meal = match meal {
                Some(id) => Some(store.catalog.get(id).ok_or(StoreError::MealNotFound(id))?),
                None => None,
            };

            let mut list = ShoppingChecklist::for_meal(meal);
            for id in &check {
                list.toggle(id);
            }

            if args.json {
                let out = json!({
                    "completion_rate": list.completion_rate(),
                    "groups": list.groups(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", shopping_msg(&list));
            }
        }
        Cmd::Classify { names } => {
            for name in names {
                let category = classify(&name);
                if args.json {
                    println!("{}", json!({ "name": name, "category": category }));
                } else {
                    println!("{}: {}", name, category);
                }
            }
        }
        Cmd::Add {
            name,
            main_dish,
            side_dishes,
            ingredients,
            cooking_time,
            difficulty,
        } => {
            let cooking_time = parse_cooking_time(&cooking_time).context("meal not added")?;
            let draft = MealDraft {
                name,
                main_dish,
                side_dishes,
                ingredients,
                cooking_time: i64::from(cooking_time),
                difficulty,
            };
            let meal = store.catalog.add(draft).context("meal not added")?;
            log::info!("Added '{}' as #{}", meal.name, meal.id);

            if args.json {
                println!("{}", serde_json::to_string_pretty(store.catalog.list())?);
            } else {
                for meal in store.catalog.list() {
                    print!("#{} {}", meal.id, meal_card_msg(meal));
                }
            }
        }
        Cmd::Delete { id } => {
            match store.catalog.delete(id) {
                Ok(meal) => log::info!("Deleted '{}'", meal.name),
                Err(StoreError::MealNotFound(id)) => {
                    println!("No meal #{}, nothing deleted.", id)
                }
                Err(e) => return Err(e.into()),
            }
            print_history(&store, args.json)?;
        }
    }

    Ok(())
}

fn print_history(store: &MealStore, json: bool) -> Result<()> {
    let history = store.resolved_history();
    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
    } else {
        print!("{}", history_msg(&history));
    }
    Ok(())
}
