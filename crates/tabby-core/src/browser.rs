//! Browser capability: a single-operation collaborator for opening tabs.

use anyhow::Result;

/// Something that can open a URL in a new browser tab. The launcher treats
/// this as opaque and fire-and-forget: a returned `Ok` means the open request
/// was dispatched, not that a tab was confirmed on screen.
pub trait BrowserLauncher {
    fn open_new_tab(&self, url: &str) -> Result<()>;
}

/// The OS default browser, dispatched via `opener` (honours `$BROWSER`).
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open_new_tab(&self, url: &str) -> Result<()> {
        Ok(opener::open_browser(url)?)
    }
}
