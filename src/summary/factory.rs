use tracing::{debug, instrument};

use super::models::{ScoreSummary, SummaryEntry};
use crate::game::Game;

/// Builds [`ScoreSummary`] snapshots. Stateless; keeps the order it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFactory;

impl SummaryFactory {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, ordered_games), fields(game_count = ordered_games.len()))]
    pub fn create_summary_for(&self, ordered_games: &[Game]) -> ScoreSummary {
        let entries = ordered_games
            .iter()
            .enumerate()
            .map(|(index, game)| SummaryEntry::from_game(index + 1, game))
            .collect();

        debug!("Score summary created");
        ScoreSummary::new(entries)
    }
}
