use std::cmp::Ordering;
use std::sync::Arc;

use super::ordering::{default_ordering, GameComparator};
use super::service::ScoreBoardService;
use super::thread_safe::ThreadSafeLiveScoreBoard;
use crate::clock::{Clock, SystemClock};
use crate::game::{Game, GameRepository, InMemoryGameRepository};
use crate::summary::SummaryFactory;

/// Builder for configuring a board. Anything left unset falls back to the
/// system clock, an in-memory repository and the default ordering.
pub struct LiveScoreBoardBuilder {
    clock: Option<Arc<dyn Clock>>,
    repository: Option<Box<dyn GameRepository>>,
    ordering: Option<GameComparator>,
    summary_factory: SummaryFactory,
}

impl LiveScoreBoardBuilder {
    pub fn new() -> Self {
        Self {
            clock: None,
            repository: None,
            ordering: None,
            summary_factory: SummaryFactory::new(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_repository(mut self, repository: Box<dyn GameRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn with_ordering<F>(mut self, ordering: F) -> Self
    where
        F: Fn(&Game, &Game) -> Ordering + Send + Sync + 'static,
    {
        self.ordering = Some(Arc::new(ordering));
        self
    }

    pub fn with_summary_factory(mut self, summary_factory: SummaryFactory) -> Self {
        self.summary_factory = summary_factory;
        self
    }

    /// Plain board for single-threaded use
    pub fn build(self) -> ScoreBoardService {
        ScoreBoardService::new(
            self.repository
                .unwrap_or_else(|| Box::new(InMemoryGameRepository::new())),
            self.clock.unwrap_or_else(|| Arc::new(SystemClock::new())),
            self.summary_factory,
            self.ordering.unwrap_or_else(default_ordering),
        )
    }

    /// Same board behind a readers/writer lock, safe to share via `Arc`
    pub fn build_thread_safe(self) -> ThreadSafeLiveScoreBoard<ScoreBoardService> {
        ThreadSafeLiveScoreBoard::new(self.build())
    }
}

impl Default for LiveScoreBoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
