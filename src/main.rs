use chrono::{Duration, Utc};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use live_scoreboard::{LiveScoreBoardBuilder, ManualClock, Score, ScoreBoardError};

/// World Cup fixtures replayed by the demo, in kick-off order
const FIXTURES: [(&str, &str, u32, u32); 5] = [
    ("Mexico", "Canada", 0, 5),
    ("Spain", "Brazil", 10, 2),
    ("Germany", "France", 2, 2),
    ("Uruguay", "Italy", 6, 6),
    ("Argentina", "Australia", 3, 1),
];

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), ScoreBoardError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "live_scoreboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting live score board demo");

    // Kick-offs one minute apart so recency tie-breaks are deterministic
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let board = Arc::new(
        LiveScoreBoardBuilder::new()
            .with_clock(clock.clone())
            .build_thread_safe(),
    );

    let mut game_ids = Vec::with_capacity(FIXTURES.len());
    for (home, away, _, _) in FIXTURES {
        game_ids.push(board.start_game(home, away)?);
        clock.advance(Duration::minutes(1));
    }

    // Score feeds arrive concurrently; the board serializes them
    let feeds = game_ids
        .iter()
        .zip(FIXTURES)
        .map(|(game_id, (_, _, home_score, away_score))| {
            let board = board.clone();
            let game_id = *game_id;
            tokio::task::spawn_blocking(move || {
                board.update_score(&game_id, Score::new(home_score, away_score))
            })
        });

    for result in join_all(feeds).await {
        match result {
            Ok(update) => update?,
            Err(join_error) => error!(error = %join_error, "Score feed task failed"),
        }
    }

    let half_time = board.get_summary();
    println!("{}\n", half_time);

    board.finish_game(&game_ids[3]);
    board.finish_game(&game_ids[1]);
    board.update_score(&game_ids[0], Score::new(3, 6))?;

    let full_time = board.get_summary();
    println!("{}\n", full_time);
    println!("Earlier snapshot is unchanged:\n{}", half_time);

    info!(live_games = full_time.len(), "Demo finished");
    Ok(())
}
