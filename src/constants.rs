/// A meal that shows up in the history is held back for this many days after
/// it was last made.
pub const MEAL_COOLDOWN_DAYS: i64 = 7;

pub const DEFAULT_QUANTITY: &str = "as needed";

// recorded when a shopping list gets confirmed
pub const CONFIRM_RATING: u8 = 4;
pub const CONFIRM_NOTE: &str = "added from shopping list";

pub const RATING_SLOTS: usize = 5;

pub const NO_SUGGESTIONS_MSG: &str = "No meals left to suggest. Check the history and come back later.";
pub const EMPTY_LIST_MSG: &str = "Shopping list is empty.";
