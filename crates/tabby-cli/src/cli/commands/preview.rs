//! `tabby preview` – show a selection without opening anything.

use anyhow::Result;

use super::draw_selection;

pub fn run_preview() -> Result<()> {
    let selection = draw_selection()?;
    for url in &selection {
        println!("{url}");
    }
    Ok(())
}
