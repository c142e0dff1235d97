pub mod models;
pub mod repository;

pub use models::{Game, GameId, Score};
pub use repository::{GameRepository, InMemoryGameRepository};
