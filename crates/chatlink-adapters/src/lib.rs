pub mod browser;
pub mod log;

pub use browser::SystemBrowser;
pub use log::LogOpener;
