use std::collections::HashMap;
use tracing::{debug, instrument};

use super::models::{Game, GameId};

/// Storage for live games keyed by [`GameId`]
pub trait GameRepository: Send + Sync {
    /// Inserts or overwrites unconditionally
    fn save(&mut self, game_id: GameId, game: Game);

    /// Removes the game if present, no-op otherwise
    fn delete(&mut self, game_id: &GameId);

    /// Replaces the game only if the key already exists.
    /// Unlike `save`, an unknown key is a silent no-op.
    fn update(&mut self, game_id: &GameId, updated_game: Game);

    fn get(&self, game_id: &GameId) -> Option<Game>;

    /// All live games in no particular order
    fn get_all(&self) -> Vec<Game>;
}

/// HashMap-backed repository. Performs no synchronization of its own.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: HashMap<GameId, Game>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }
}

impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self, game))]
    fn save(&mut self, game_id: GameId, game: Game) {
        debug!(game_id = %game_id, "Saving game in memory");
        self.games.insert(game_id, game);
    }

    #[instrument(skip(self))]
    fn delete(&mut self, game_id: &GameId) {
        match self.games.remove(game_id) {
            Some(_) => debug!(game_id = %game_id, "Game removed from memory"),
            None => debug!(game_id = %game_id, "Game not in memory, nothing to remove"),
        }
    }

    #[instrument(skip(self, updated_game))]
    fn update(&mut self, game_id: &GameId, updated_game: Game) {
        match self.games.get_mut(game_id) {
            Some(game) => {
                *game = updated_game;
                debug!(game_id = %game_id, "Game replaced in memory");
            }
            None => debug!(game_id = %game_id, "Game not in memory, update ignored"),
        }
    }

    fn get(&self, game_id: &GameId) -> Option<Game> {
        self.games.get(game_id).cloned()
    }

    fn get_all(&self) -> Vec<Game> {
        self.games.values().cloned().collect()
    }
}
