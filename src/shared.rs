use thiserror::Error;

use crate::game::GameId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreBoardError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Game with ID {0} was not found!")]
    GameNotFound(GameId),
}
