//! Board setup helpers shared by integration tests
#![allow(dead_code)] // Test utilities may not all be used in every test

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;

use live_scoreboard::{
    GameId, LiveScoreBoard, LiveScoreBoardBuilder, ManualClock, Score, ScoreBoardService,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub board: ScoreBoardService,
    pub clock: Arc<ManualClock>,
    pub game_ids: Vec<GameId>,
}

impl TestSetup {
    pub fn game(&self, index: usize) -> GameId {
        self.game_ids[index]
    }
}

pub struct TestSetupBuilder {
    games: Vec<(String, String, Score)>,
    kickoff_gap: Duration,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            games: vec![],
            kickoff_gap: Duration::minutes(1),
        }
    }

    pub fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 11, 20, 16, 0, 0).unwrap()
    }

    pub fn with_game(mut self, home: &str, away: &str, score: Score) -> Self {
        self.games
            .push((home.to_string(), away.to_string(), score));
        self
    }

    /// Five fixtures started in order, each a minute after the previous one
    pub fn with_world_cup_games(self) -> Self {
        self.with_game("Mexico", "Canada", Score::new(0, 5))
            .with_game("Spain", "Brazil", Score::new(10, 2))
            .with_game("Germany", "France", Score::new(2, 2))
            .with_game("Uruguay", "Italy", Score::new(6, 6))
            .with_game("Argentina", "Australia", Score::new(3, 1))
    }

    /// Start every game first, then apply the scores
    pub fn build(self) -> TestSetup {
        let clock = Arc::new(ManualClock::new(Self::kickoff()));
        let mut board = LiveScoreBoardBuilder::new()
            .with_clock(clock.clone())
            .build();

        let mut game_ids = Vec::with_capacity(self.games.len());
        for (home, away, _) in &self.games {
            game_ids.push(board.start_game(home, away).expect("game should start"));
            clock.advance(self.kickoff_gap);
        }

        for (game_id, (_, _, score)) in game_ids.iter().zip(&self.games) {
            board
                .update_score(game_id, *score)
                .expect("score update should succeed");
        }

        TestSetup {
            board,
            clock,
            game_ids,
        }
    }
}
