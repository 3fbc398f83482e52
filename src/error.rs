use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("failed to read game data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse game data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to write standings table: {0}")]
    Csv(#[from] csv::Error),

    #[error("team '{0}' does not appear in the standings")]
    UnknownTeam(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
