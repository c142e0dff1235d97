use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::game::Game;

/// One row of a summary, already positioned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub position: usize,
    pub home_team: String,
    pub home_score: u32,
    pub away_team: String,
    pub away_score: u32,
}

impl SummaryEntry {
    pub(crate) fn from_game(position: usize, game: &Game) -> Self {
        Self {
            position,
            home_team: game.home_team_name().to_string(),
            home_score: game.score().home(),
            away_team: game.away_team_name().to_string(),
            away_score: game.score().away(),
        }
    }
}

impl fmt::Display for SummaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {} - {} {}",
            self.position, self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}

/// Immutable snapshot of the live games at the moment it was created.
/// Owns copies of every row, so later board mutations never show up here.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    entries: Vec<SummaryEntry>,
    #[serde(skip)]
    rendered: OnceLock<String>,
}

impl ScoreSummary {
    pub(crate) fn new(entries: Vec<SummaryEntry>) -> Self {
        Self {
            entries,
            rendered: OnceLock::new(),
        }
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newline separated `"<n>. <home> <homeScore> - <away> <awayScore>"` lines.
    /// Computed on first call and reused afterwards.
    pub fn render(&self) -> &str {
        self.rendered.get_or_init(|| {
            self.entries
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

impl PartialEq for ScoreSummary {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ScoreSummary {}
