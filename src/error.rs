use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarchError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Unknown hero '{0}' (not in catalog)")]
    UnknownHero(String),

    #[error("Duplicate heroes used in forced pairings: '{0}'")]
    DuplicatePin(String),

    #[error("Hero '{0}' is both pinned into a pair and pinned as leader-only")]
    PinLeaderOverlap(String),

    #[error("No valid roster: {0}")]
    InfeasibleParity(String),
}

pub type MsResult<T> = Result<T, MarchError>;
