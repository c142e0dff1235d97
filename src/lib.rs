// Library crate for tracking live match scores
// This file exposes the public API for the demo binary and integration tests

pub mod board;
pub mod clock;
pub mod game;
pub mod shared;
pub mod summary;

// Re-export commonly used types for easier access
pub use board::{
    LiveScoreBoard, LiveScoreBoardBuilder, ScoreBoardService, ThreadSafeLiveScoreBoard,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use game::{Game, GameId, GameRepository, InMemoryGameRepository, Score};
pub use shared::ScoreBoardError;
pub use summary::{ScoreSummary, SummaryEntry, SummaryFactory};
