//! `tabby` / `tabby open` – open a random batch of tabs.

use anyhow::{Context, Result};
use tabby_core::{run, Catalog, SystemBrowser};

pub fn run_open() -> Result<()> {
    let catalog = Catalog::builtin();
    catalog.validate().context("built-in catalog is invalid")?;

    let mut rng = rand::thread_rng();
    let report = run(&mut rng, &catalog, &SystemBrowser)?;
    if report.all_opened() {
        println!("Opened {} tabs.", report.opened);
    } else {
        println!(
            "Opened {} of {} tabs ({} failed).",
            report.opened,
            report.attempted,
            report.failed.len()
        );
    }
    Ok(())
}
