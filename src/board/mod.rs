mod builder;
pub mod ordering;
mod service;
mod thread_safe;

pub use builder::LiveScoreBoardBuilder;
pub use ordering::GameComparator;
pub use service::{LiveScoreBoard, ScoreBoardService};
pub use thread_safe::ThreadSafeLiveScoreBoard;
