pub mod error;
pub mod link_service;

pub use error::AppError;
pub use link_service::LinkService;
