use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("'{value}' has an invalid datatype on parameter '{name}'")]
    InvalidType { name: String, value: String },
    #[error("{value} is out of range on parameter '{name}'")]
    InvalidRange { name: String, value: i64 },
    #[error("{value} has an invalid digit count on parameter '{name}'")]
    InvalidLength { name: String, value: u64 },
    #[error("'{key}' is not a valid length bound on parameter '{name}'")]
    InvalidOption { name: String, key: String },
    #[error("text is an object")]
    InvalidArgument,
    #[error("message is {length} encoded characters, limit is {limit}")]
    MessageTooLong { length: usize, limit: usize },
}
