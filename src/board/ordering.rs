//! Comparators used to order games in a summary.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::game::Game;

/// Shared, thread-safe comparator over games
pub type GameComparator = Arc<dyn Fn(&Game, &Game) -> Ordering + Send + Sync>;

/// Higher combined score first
pub fn highest_total_score(a: &Game, b: &Game) -> Ordering {
    b.score().total().cmp(&a.score().total())
}

/// Most recently started first
pub fn most_recent_first(a: &Game, b: &Game) -> Ordering {
    b.creation_timestamp().cmp(&a.creation_timestamp())
}

/// Highest total score, ties broken by most recent start
pub fn default_ordering() -> GameComparator {
    Arc::new(|a: &Game, b: &Game| highest_total_score(a, b).then_with(|| most_recent_first(a, b)))
}
