use thiserror::Error;
use types::GameError;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Malformed input: {0:?}")]
    MalformedInput(String),

    #[error("Input closed before setup finished")]
    InputClosed,
}
