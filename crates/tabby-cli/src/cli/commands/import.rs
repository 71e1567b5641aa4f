//! `tabby import <PATH>` – open every tab from a saved tab list.

use std::path::Path;

use anyhow::Result;
use tabby_core::export::{flatten_urls, read_tab_list};
use tabby_core::{open_all, SystemBrowser};

pub fn run_import(path: &Path) -> Result<()> {
    let groups = read_tab_list(path)?;
    let urls = flatten_urls(&groups);
    if urls.is_empty() {
        println!("Tab list {} holds no tabs.", path.display());
        return Ok(());
    }

    tracing::info!("importing {} tabs from {}", urls.len(), path.display());
    let report = open_all(&urls, &SystemBrowser);
    println!(
        "Opened {} of {} imported tabs.",
        report.opened, report.attempted
    );
    Ok(())
}
