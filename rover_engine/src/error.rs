use thiserror::Error;

/// Errors raised by the rover engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoverError {
    #[error("unknown direction code `{0}`")]
    UnknownDirection(String),

    #[error("page is missing required element `{0}`")]
    MissingElement(String),

    #[error("page already has an element `{0}`")]
    DuplicateElement(String),

    #[error("`{0}` is not a grid cell identifier")]
    InvalidCellId(String),

    #[error("({x}, {y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },

    #[error("invalid page configuration: {0}")]
    Config(String),

    #[error("terminal output failed: {0}")]
    Terminal(String),
}

impl From<serde_json::Error> for RoverError {
    fn from(value: serde_json::Error) -> Self {
        RoverError::Config(value.to_string())
    }
}

impl From<std::io::Error> for RoverError {
    fn from(value: std::io::Error) -> Self {
        RoverError::Terminal(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RoverError>;
