use thiserror::Error;

use crate::core::types::Year;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("unknown country: {0}")]
    UnknownCountry(String),

    #[error("action not available in the {0:?} phase")]
    WrongPhase(crate::region::game::GamePhase),

    #[error("the game runs through {end}; cannot finish in {year}")]
    HorizonNotReached { year: Year, end: Year },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
