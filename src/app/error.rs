use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Level loading error: {0}")]
    LevelLoad(#[from] crate::level_loader::LevelLoaderError),
    #[error("Level check failed: {0}")]
    Check(#[from] crate::path::CheckError),
    #[error("Route replay failed: {0}")]
    Replay(#[from] crate::path::ReplayError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("General error: {0}")]
    General(String),
}
