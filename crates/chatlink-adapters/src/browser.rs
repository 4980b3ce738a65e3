use chatlink_ports::error::OpenError;
use chatlink_ports::outbound::UrlOpener;

/// Opens URLs through the platform's default browser launcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        tracing::debug!(url, "opening url in system browser");
        launch(url)
    }
}

#[cfg(target_os = "macos")]
fn launch(url: &str) -> Result<(), OpenError> {
    std::process::Command::new("open")
        .arg(url)
        .spawn()
        .map_err(|e| OpenError::Launch(e.to_string()))?;
    Ok(())
}

#[cfg(target_os = "linux")]
fn launch(url: &str) -> Result<(), OpenError> {
    std::process::Command::new("xdg-open")
        .arg(url)
        .spawn()
        .map_err(|e| OpenError::Launch(e.to_string()))?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn launch(url: &str) -> Result<(), OpenError> {
    std::process::Command::new("cmd")
        .args(["/C", "start", url])
        .spawn()
        .map_err(|e| OpenError::Launch(e.to_string()))?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn launch(_url: &str) -> Result<(), OpenError> {
    Err(OpenError::Unsupported)
}
