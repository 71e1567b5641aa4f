//! The tab launcher: sample a selection, then dispatch one open request per
//! URL. One pass, no retries; a failed open is logged and skipped.

use rand::Rng;

use crate::browser::BrowserLauncher;
use crate::catalog::Catalog;
use crate::selection::{sample_urls, SelectionError, SAMPLE_SIZE};

/// One URL the browser collaborator refused to open.
#[derive(Debug, Clone)]
pub struct FailedLaunch {
    pub url: String,
    pub reason: String,
}

/// Outcome of a launch batch. The batch as a whole succeeds as long as every
/// selected URL was attempted; individual failures are listed here.
#[derive(Debug, Default)]
pub struct LaunchReport {
    pub attempted: usize,
    pub opened: usize,
    pub failed: Vec<FailedLaunch>,
}

impl LaunchReport {
    pub fn all_opened(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Draws [`SAMPLE_SIZE`] URLs from the catalog and opens each in a new tab,
/// in selection order. Fails up front (before any launch) if the catalog is
/// too small; never fails because a single open request was refused.
pub fn run<R, B>(
    rng: &mut R,
    catalog: &Catalog,
    browser: &B,
) -> Result<LaunchReport, SelectionError>
where
    R: Rng + ?Sized,
    B: BrowserLauncher + ?Sized,
{
    let selection = sample_urls(rng, catalog, SAMPLE_SIZE)?;
    Ok(open_all(&selection, browser))
}

/// Opens every URL in order, warn-and-continue on failure. Each URL is
/// attempted exactly once.
pub fn open_all<B>(urls: &[String], browser: &B) -> LaunchReport
where
    B: BrowserLauncher + ?Sized,
{
    let mut report = LaunchReport::default();
    for url in urls {
        report.attempted += 1;
        match browser.open_new_tab(url) {
            Ok(()) => {
                tracing::debug!("opened tab: {url}");
                report.opened += 1;
            }
            Err(err) => {
                tracing::warn!("could not open {url}: {err:#}");
                report.failed.push(FailedLaunch {
                    url: url.clone(),
                    reason: format!("{err:#}"),
                });
            }
        }
    }
    report
}
