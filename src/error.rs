use std::path::PathBuf;

use thiserror::Error;

pub type Fallible<T> = Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError
{
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("word deck ran out before the session finished")]
    DeckExhausted,

    #[error("keyword pool is empty")]
    EmptyKeywordPool,

    #[error("need at least {needed} questions, found {found}")]
    NotEnoughQuestions
    {
        needed: usize,
        found: usize,
    },

    #[error("no question at index {0}")]
    NoSuchQuestion(usize),

    #[error("unknown game '{0}', run with --help")]
    UnknownGame(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {path:?}: {source}")]
    Json
    {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn invalid_config<T>(msg: impl Into<String>) -> Fallible<T>
{
    Err(GameError::InvalidConfig(msg.into()))
}
