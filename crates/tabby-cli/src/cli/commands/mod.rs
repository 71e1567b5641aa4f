mod export;
mod import;
mod open;
mod preview;

pub use export::run_export;
pub use import::run_import;
pub use open::run_open;
pub use preview::run_preview;

use anyhow::{Context, Result};
use tabby_core::{sample_urls, Catalog, SAMPLE_SIZE};

/// Validated built-in catalog plus a fresh selection from process entropy.
fn draw_selection() -> Result<Vec<String>> {
    let catalog = Catalog::builtin();
    catalog.validate().context("built-in catalog is invalid")?;
    let mut rng = rand::thread_rng();
    Ok(sample_urls(&mut rng, &catalog, SAMPLE_SIZE)?)
}
