pub mod browser;
pub mod catalog;
pub mod export;
pub mod launcher;
pub mod logging;
pub mod selection;

pub use browser::{BrowserLauncher, SystemBrowser};
pub use catalog::Catalog;
pub use launcher::{open_all, run, LaunchReport};
pub use selection::{sample_urls, SelectionError, SAMPLE_SIZE};
