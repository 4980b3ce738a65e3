use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no way to open a URL on this platform")]
    Unsupported,
    #[error("failed to launch opener: {0}")]
    Launch(String),
}
