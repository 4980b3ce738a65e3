use chatlink_core::error::DomainError;
use chatlink_ports::error::OpenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("open error: {0}")]
    Open(#[from] OpenError),
}
