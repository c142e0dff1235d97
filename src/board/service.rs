use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::ordering::GameComparator;
use crate::clock::Clock;
use crate::game::{Game, GameId, GameRepository, Score};
use crate::shared::ScoreBoardError;
use crate::summary::{ScoreSummary, SummaryFactory};

/// The four operations a live score board offers
pub trait LiveScoreBoard: Send + Sync {
    /// Starts tracking a game at 0-0 and returns its fresh id
    fn start_game(&mut self, home_team: &str, away_team: &str) -> Result<GameId, ScoreBoardError>;

    /// Stops tracking a game. Unknown or already finished ids are ignored.
    fn finish_game(&mut self, game_id: &GameId);

    /// Replaces the score of a live game
    fn update_score(&mut self, game_id: &GameId, score: Score) -> Result<(), ScoreBoardError>;

    /// Ordered snapshot of all live games
    fn get_summary(&self) -> ScoreSummary;
}

/// Repository-backed board. Not thread safe on its own; wrap it in
/// [`super::ThreadSafeLiveScoreBoard`] to share between threads.
pub struct ScoreBoardService {
    repository: Box<dyn GameRepository>,
    clock: Arc<dyn Clock>,
    summary_factory: SummaryFactory,
    ordering: GameComparator,
}

impl ScoreBoardService {
    pub fn new(
        repository: Box<dyn GameRepository>,
        clock: Arc<dyn Clock>,
        summary_factory: SummaryFactory,
        ordering: GameComparator,
    ) -> Self {
        Self {
            repository,
            clock,
            summary_factory,
            ordering,
        }
    }

    fn validate_team_name(side: &str, name: &str) -> Result<(), ScoreBoardError> {
        if name.trim().is_empty() {
            warn!(side = side, "Rejected empty team name");
            return Err(ScoreBoardError::InvalidArgument(format!(
                "{} team name cannot be empty",
                side
            )));
        }
        Ok(())
    }
}

impl LiveScoreBoard for ScoreBoardService {
    #[instrument(skip(self))]
    fn start_game(&mut self, home_team: &str, away_team: &str) -> Result<GameId, ScoreBoardError> {
        Self::validate_team_name("Home", home_team)?;
        Self::validate_team_name("Away", away_team)?;

        let game = Game::new(home_team, away_team, Score::default(), self.clock.now());
        let game_id = GameId::generate();
        self.repository.save(game_id, game);

        info!(game_id = %game_id, home_team = %home_team, away_team = %away_team, "Game started");
        Ok(game_id)
    }

    #[instrument(skip(self))]
    fn finish_game(&mut self, game_id: &GameId) {
        self.repository.delete(game_id);
        info!(game_id = %game_id, "Game finished");
    }

    #[instrument(skip(self))]
    fn update_score(&mut self, game_id: &GameId, score: Score) -> Result<(), ScoreBoardError> {
        let Some(game) = self.repository.get(game_id) else {
            warn!(game_id = %game_id, "Score update for unknown game");
            return Err(ScoreBoardError::GameNotFound(*game_id));
        };

        self.repository.update(game_id, game.with_updated_score(score));

        info!(game_id = %game_id, score = %score, total_score = score.total(), "Score updated");
        Ok(())
    }

    #[instrument(skip(self))]
    fn get_summary(&self) -> ScoreSummary {
        let mut games = self.repository.get_all();
        // sort_by is stable, so equal keys keep their relative order
        games.sort_by(|a, b| (self.ordering)(a, b));
        self.summary_factory.create_summary_for(&games)
    }
}
