//! Instrumented board that records how delegated calls overlap in time
#![allow(dead_code)] // Test utilities may not all be used in every test

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use live_scoreboard::{
    GameId, LiveScoreBoard, LiveScoreBoardBuilder, Score, ScoreBoardError, ScoreBoardService,
    ScoreSummary,
};

// ============================================================================
// Probe Infrastructure
// ============================================================================

#[derive(Default)]
pub struct ProbeCounters {
    active_writes: AtomicUsize,
    active_reads: AtomicUsize,
    max_writes: AtomicUsize,
    max_reads: AtomicUsize,
    write_overlapped: AtomicBool,
}

impl ProbeCounters {
    pub fn max_concurrent_writes(&self) -> usize {
        self.max_writes.load(Ordering::SeqCst)
    }

    pub fn max_concurrent_reads(&self) -> usize {
        self.max_reads.load(Ordering::SeqCst)
    }

    /// True if any mutation ran while another mutation or a summary was in flight
    pub fn write_overlapped(&self) -> bool {
        self.write_overlapped.load(Ordering::SeqCst)
    }
}

/// Wraps a real board and holds each delegated call open for a while
pub struct ProbeBoard {
    inner: ScoreBoardService,
    counters: Arc<ProbeCounters>,
    write_hold: Duration,
    read_rendezvous: usize,
    read_patience: Duration,
}

impl ProbeBoard {
    /// `read_rendezvous` summaries wait (up to a bounded patience) for each other
    /// inside the delegate, so overlapping reads are observable.
    pub fn new(read_rendezvous: usize) -> (Self, Arc<ProbeCounters>) {
        let counters = Arc::new(ProbeCounters::default());
        let probe = Self {
            inner: LiveScoreBoardBuilder::new().build(),
            counters: counters.clone(),
            write_hold: Duration::from_millis(5),
            read_rendezvous,
            read_patience: Duration::from_secs(2),
        };
        (probe, counters)
    }

    fn enter_write(&self) {
        let writes = self.counters.active_writes.fetch_add(1, Ordering::SeqCst) + 1;
        let reads = self.counters.active_reads.load(Ordering::SeqCst);
        if writes > 1 || reads > 0 {
            self.counters.write_overlapped.store(true, Ordering::SeqCst);
        }
        self.counters.max_writes.fetch_max(writes, Ordering::SeqCst);
        thread::sleep(self.write_hold);
    }

    fn exit_write(&self) {
        self.counters.active_writes.fetch_sub(1, Ordering::SeqCst);
    }
}

impl LiveScoreBoard for ProbeBoard {
    fn start_game(&mut self, home_team: &str, away_team: &str) -> Result<GameId, ScoreBoardError> {
        self.enter_write();
        let result = self.inner.start_game(home_team, away_team);
        self.exit_write();
        result
    }

    fn finish_game(&mut self, game_id: &GameId) {
        self.enter_write();
        self.inner.finish_game(game_id);
        self.exit_write();
    }

    fn update_score(&mut self, game_id: &GameId, score: Score) -> Result<(), ScoreBoardError> {
        self.enter_write();
        let result = self.inner.update_score(game_id, score);
        self.exit_write();
        result
    }

    fn get_summary(&self) -> ScoreSummary {
        self.counters.active_reads.fetch_add(1, Ordering::SeqCst);
        if self.counters.active_writes.load(Ordering::SeqCst) > 0 {
            self.counters.write_overlapped.store(true, Ordering::SeqCst);
        }

        let deadline = Instant::now() + self.read_patience;
        while self.counters.active_reads.load(Ordering::SeqCst) < self.read_rendezvous
            && Instant::now() < deadline
        {
            thread::sleep(Duration::from_millis(1));
        }

        let reads = self.counters.active_reads.load(Ordering::SeqCst);
        self.counters.max_reads.fetch_max(reads, Ordering::SeqCst);

        let summary = self.inner.get_summary();
        self.counters.active_reads.fetch_sub(1, Ordering::SeqCst);
        summary
    }
}
