use crate::error::OpenError;

/// Hands a finished URL to the hosting environment (a browser, usually).
/// Fire-and-forget: nothing about the opened view is observed.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}
