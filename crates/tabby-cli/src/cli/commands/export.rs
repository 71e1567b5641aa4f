//! `tabby export [PATH]` – save a random selection as a tab-list file.

use std::path::Path;

use anyhow::Result;
use tabby_core::export::{group_by_domain, write_tab_list};

use super::draw_selection;

pub fn run_export(path: &Path) -> Result<()> {
    let selection = draw_selection()?;
    let groups = group_by_domain(&selection);
    write_tab_list(path, &groups)?;
    println!(
        "Saved {} tabs in {} domain groups to {}",
        selection.len(),
        groups.len(),
        path.display()
    );
    Ok(())
}
