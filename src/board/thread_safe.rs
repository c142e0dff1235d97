use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{instrument, trace};

use super::service::LiveScoreBoard;
use crate::game::{GameId, Score};
use crate::shared::ScoreBoardError;
use crate::summary::ScoreSummary;

/// Decorator that guards a whole board with one readers/writer lock.
///
/// Mutations hold the write lock for the full delegated call, so at most one
/// runs at a time and none overlaps a summary. Summaries share the read lock.
/// Guards are released on every exit path, error returns included.
///
/// Calls are not reentrant: invoking the wrapper from inside a delegated call
/// on the same thread deadlocks.
pub struct ThreadSafeLiveScoreBoard<B: LiveScoreBoard> {
    inner: RwLock<B>,
}

impl<B: LiveScoreBoard> ThreadSafeLiveScoreBoard<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner: RwLock::new(inner),
        }
    }

    pub fn into_inner(self) -> B {
        self.inner.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    // A delegate that panicked mid-call leaves the lock poisoned. The board's
    // own operations never leave partial state, so keep serving.
    fn write(&self) -> RwLockWriteGuard<'_, B> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    fn read(&self) -> RwLockReadGuard<'_, B> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    #[instrument(skip(self))]
    pub fn start_game(&self, home_team: &str, away_team: &str) -> Result<GameId, ScoreBoardError> {
        trace!("Acquiring write lock");
        self.write().start_game(home_team, away_team)
    }

    #[instrument(skip(self))]
    pub fn finish_game(&self, game_id: &GameId) {
        trace!("Acquiring write lock");
        self.write().finish_game(game_id)
    }

    #[instrument(skip(self))]
    pub fn update_score(&self, game_id: &GameId, score: Score) -> Result<(), ScoreBoardError> {
        trace!("Acquiring write lock");
        self.write().update_score(game_id, score)
    }

    #[instrument(skip(self))]
    pub fn get_summary(&self) -> ScoreSummary {
        trace!("Acquiring read lock");
        self.read().get_summary()
    }
}

impl<B: LiveScoreBoard> LiveScoreBoard for ThreadSafeLiveScoreBoard<B> {
    fn start_game(&mut self, home_team: &str, away_team: &str) -> Result<GameId, ScoreBoardError> {
        ThreadSafeLiveScoreBoard::start_game(self, home_team, away_team)
    }

    fn finish_game(&mut self, game_id: &GameId) {
        ThreadSafeLiveScoreBoard::finish_game(self, game_id)
    }

    fn update_score(&mut self, game_id: &GameId, score: Score) -> Result<(), ScoreBoardError> {
        ThreadSafeLiveScoreBoard::update_score(self, game_id, score)
    }

    fn get_summary(&self) -> ScoreSummary {
        ThreadSafeLiveScoreBoard::get_summary(self)
    }
}
