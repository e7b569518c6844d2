use anyhow::{Context, Result};

use crate::{
    consts::BUILTIN_DASHBOARDS, controllers::cache::CacheStore, entities::DashboardEntry,
    errors::DigError,
};

pub fn builtin_dashboards() -> impl Iterator<Item = DashboardEntry> {
    BUILTIN_DASHBOARDS
        .iter()
        .map(|(display_name, resource)| DashboardEntry::builtin(*display_name, *resource))
}

/// Parses the cached listing. Entries without a display name are labelled
/// with their identifier so every choice has something to match on.
pub fn parse_discovered(bytes: &[u8]) -> Result<Vec<DashboardEntry>> {
    let entries: Vec<DashboardEntry> = serde_json::from_slice(bytes)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| -> Result<DashboardEntry> {
            let DashboardEntry {
                display_name,
                identifier,
                ..
            } = entry;
            if !display_name.is_empty() {
                return Ok(DashboardEntry::discovered(display_name, identifier));
            }
            if identifier.is_empty() {
                return Err(DigError::MalformedEntry(index).into());
            }
            Ok(DashboardEntry::discovered(identifier.clone(), identifier))
        })
        .collect()
}

/// Discovered dashboards in cache order, followed by the built-in list.
pub fn load(store: &CacheStore, project_id: &str) -> Result<Vec<DashboardEntry>> {
    let path = store.cache_path(project_id);
    let bytes = CacheStore::read(&path)?;
    let mut dashboards = parse_discovered(&bytes).with_context(|| {
        format!(
            "Failed to parse {}. Run again with -u to regenerate it",
            path.display()
        )
    })?;
    dashboards.extend(builtin_dashboards());
    Ok(dashboards)
}
