pub mod error;
pub mod outbound;

pub use error::OpenError;
pub use outbound::UrlOpener;
