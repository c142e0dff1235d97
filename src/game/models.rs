use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::ScoreBoardError;

/// Opaque identity of a live game. Generated on start, never derived from game content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(Uuid);

impl GameId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Home and away goals. Negative values are unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    home: u32,
    away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn home(&self) -> u32 {
        self.home
    }

    pub fn away(&self) -> u32 {
        self.away
    }

    pub fn total(&self) -> u64 {
        u64::from(self.home) + u64::from(self.away)
    }
}

/// Fallible construction from signed input, e.g. values parsed from a feed
impl TryFrom<(i64, i64)> for Score {
    type Error = ScoreBoardError;

    fn try_from((home, away): (i64, i64)) -> Result<Self, Self::Error> {
        match (u32::try_from(home), u32::try_from(away)) {
            (Ok(home), Ok(away)) => Ok(Self::new(home, away)),
            _ => Err(ScoreBoardError::InvalidArgument(format!(
                "Score cannot be negative or exceed u32. Home={}, Away={}",
                home, away
            ))),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// A live game record. Values are never mutated in place once stored;
/// score changes go through [`Game::with_updated_score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    home_team_name: String,
    away_team_name: String,
    score: Score,
    creation_timestamp: DateTime<Utc>,
}

impl Game {
    pub fn new(
        home_team_name: impl Into<String>,
        away_team_name: impl Into<String>,
        score: Score,
        creation_timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            home_team_name: home_team_name.into(),
            away_team_name: away_team_name.into(),
            score,
            creation_timestamp,
        }
    }

    pub fn home_team_name(&self) -> &str {
        &self.home_team_name
    }

    pub fn away_team_name(&self) -> &str {
        &self.away_team_name
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn creation_timestamp(&self) -> DateTime<Utc> {
        self.creation_timestamp
    }

    /// Returns a copy with the same teams and creation time but a new score
    pub fn with_updated_score(&self, score: Score) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }
}
