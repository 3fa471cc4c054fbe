use std::collections::HashSet;

use chrono::{DateTime, Duration, Local};
use rand::{seq::SliceRandom, Rng};

use crate::constants::MEAL_COOLDOWN_DAYS;
use crate::data_types::{HistoryEntry, Meal, MealId};
use crate::errors::DeckError;

fn is_eligible(meal: &Meal, recent: &HashSet<MealId>, now: DateTime<Local>) -> bool {
    if !recent.contains(&meal.id) {
        return true;
    }

    // a meal in the history without last_made never comes back
    match meal.last_made {
        Some(last_made) => now - last_made > Duration::days(MEAL_COOLDOWN_DAYS),
        None => false,
    }
}

/// Meals that may be suggested at `now`, shuffled with `rng`.
pub fn select_candidates_with<R: Rng + ?Sized>(
    meals: &[Meal],
    history: &[HistoryEntry],
    now: DateTime<Local>,
    rng: &mut R,
) -> Vec<Meal> {
    let recent: HashSet<MealId> = history.iter().map(|entry| entry.meal_id).collect();

    let mut candidates: Vec<Meal> = meals
        .iter()
        .filter(|meal| is_eligible(meal, &recent, now))
        .cloned()
        .collect();
    candidates.shuffle(rng);

    log::debug!(
        "{} of {} meals eligible for suggestion",
        candidates.len(),
        meals.len()
    );
    candidates
}

pub fn select_candidates(
    meals: &[Meal],
    history: &[HistoryEntry],
    now: DateTime<Local>,
) -> Vec<Meal> {
    select_candidates_with(meals, history, now, &mut rand::thread_rng())
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SwipeAction {
    Accept,
    Reject,
}

/// Handed out by [`SwipeDeck::begin`]; the deck stays locked until it is
/// passed back to [`SwipeDeck::finish`].
#[must_use]
#[derive(Debug)]
pub struct PendingSwipe {
    action: SwipeAction,
}

impl PendingSwipe {
    pub fn action(&self) -> SwipeAction {
        self.action
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwipeOutcome {
    /// Rejected, the deck moved on to the next card.
    Next,
    /// Rejected the last card, nothing left to show.
    Exhausted,
    Accepted(Meal),
}

#[derive(Debug, Clone, PartialEq)]
enum DeckState {
    Browsing,
    Exhausted,
    Closed,
}

/// Suggestions shown one card at a time.
#[derive(Debug, Clone)]
pub struct SwipeDeck {
    cards: Vec<Meal>,
    index: usize,
    in_flight: bool,
    state: DeckState,
}

impl SwipeDeck {
    pub fn new(cards: Vec<Meal>) -> Self {
        let state = if cards.is_empty() {
            DeckState::Exhausted
        } else {
            DeckState::Browsing
        };

        SwipeDeck {
            cards,
            index: 0,
            in_flight: false,
            state,
        }
    }

    pub fn current(&self) -> Option<&Meal> {
        match self.state {
            DeckState::Exhausted => None,
            _ => self.cards.get(self.index),
        }
    }

    /// The card behind the current one.
    pub fn peek_next(&self) -> Option<&Meal> {
        self.current().and(self.cards.get(self.index + 1))
    }

    /// 1-based position of the current card and the deck size.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.cards.len())
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == DeckState::Exhausted
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn begin(&mut self, action: SwipeAction) -> Result<PendingSwipe, DeckError> {
        if self.in_flight {
            return Err(DeckError::Busy);
        }
        match self.state {
            DeckState::Exhausted => return Err(DeckError::Exhausted),
            DeckState::Closed => return Err(DeckError::Closed),
            DeckState::Browsing => {}
        }

        self.in_flight = true;
        Ok(PendingSwipe { action })
    }

    pub fn finish(&mut self, pending: PendingSwipe) -> SwipeOutcome {
        self.in_flight = false;

        match pending.action {
            SwipeAction::Reject if self.index + 1 >= self.cards.len() => {
                log::info!("Swipe deck exhausted after {} cards", self.cards.len());
                self.state = DeckState::Exhausted;
                SwipeOutcome::Exhausted
            }
            SwipeAction::Reject => {
                self.index += 1;
                SwipeOutcome::Next
            }
            SwipeAction::Accept => {
                self.state = DeckState::Closed;
                let meal = self.cards[self.index].clone();
                log::debug!("Accepted meal {} '{}'", meal.id, meal.name);
                SwipeOutcome::Accepted(meal)
            }
        }
    }

    /// `begin` followed directly by `finish`.
    pub fn swipe(&mut self, action: SwipeAction) -> Result<SwipeOutcome, DeckError> {
        let pending = self.begin(action)?;
        Ok(self.finish(pending))
    }
}
