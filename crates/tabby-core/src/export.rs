//! Tab-list export/import.
//!
//! The on-disk format is the Tabby share file (`tabby_tabs.json`): an array
//! of domain groups, each holding the tabs for that domain:
//!
//! ```json
//! [{ "domain": "example.com", "tabs": [{ "url": "https://example.com/a" }] }]
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Default export filename.
pub const DEFAULT_EXPORT_FILE: &str = "tabby_tabs.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabEntry {
    pub url: String,
    /// Page title when known. A launcher export has none; browser-side
    /// exports carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabGroup {
    pub domain: String,
    pub tabs: Vec<TabEntry>,
}

/// Groups URLs by registrable-looking domain (host with any `www.` prefix
/// stripped), preserving first-seen group order and tab order within a group.
/// URLs without a parseable host land in an "other" group.
pub fn group_by_domain<S: AsRef<str>>(urls: &[S]) -> Vec<TabGroup> {
    let mut groups: Vec<TabGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for url in urls {
        let url = url.as_ref();
        let domain = domain_of(url).unwrap_or_else(|| "other".to_string());
        let entry = TabEntry {
            url: url.to_string(),
            title: None,
        };
        match index.get(&domain) {
            Some(&i) => groups[i].tabs.push(entry),
            None => {
                index.insert(domain.clone(), groups.len());
                groups.push(TabGroup {
                    domain,
                    tabs: vec![entry],
                });
            }
        }
    }
    groups
}

fn domain_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// Writes a tab list as pretty-printed JSON.
pub fn write_tab_list(path: &Path, groups: &[TabGroup]) -> Result<()> {
    let json = serde_json::to_string_pretty(groups)?;
    std::fs::write(path, json)
        .with_context(|| format!("write tab list: {}", path.display()))?;
    Ok(())
}

/// Reads a tab list file and returns its groups.
pub fn read_tab_list(path: &Path) -> Result<Vec<TabGroup>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read tab list: {}", path.display()))?;
    let groups: Vec<TabGroup> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse tab list JSON: {}", path.display()))?;
    Ok(groups)
}

/// All URLs in a tab list, flattened in group order.
pub fn flatten_urls(groups: &[TabGroup]) -> Vec<String> {
    groups
        .iter()
        .flat_map(|g| g.tabs.iter().map(|t| t.url.clone()))
        .collect()
}
