mod factory;
pub mod models;

pub use factory::SummaryFactory;
pub use models::{ScoreSummary, SummaryEntry};
