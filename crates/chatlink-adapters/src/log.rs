use chatlink_ports::error::OpenError;
use chatlink_ports::outbound::UrlOpener;

/// Opener for headless environments: the URL only goes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOpener;

impl UrlOpener for LogOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        tracing::info!(url, "chat link ready");
        Ok(())
    }
}
