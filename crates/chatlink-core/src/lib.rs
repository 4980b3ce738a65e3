pub mod error;
pub mod link;
pub mod message;
pub mod scalar;
pub mod validate;

pub use error::DomainError;
pub use link::ChatLink;
pub use message::Message;
pub use scalar::ScalarValue;
pub use validate::{digit_count, validate, LengthRule};
