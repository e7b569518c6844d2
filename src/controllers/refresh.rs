use std::{
    fs::{self, File},
    io::ErrorKind,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{Context, Result};

use crate::{controllers::cache::CacheStore, errors::DigError};

/// Whether the cache for a project has to be regenerated before loading.
///
/// Only a missing file triggers a refresh on its own. Any other stat error is
/// left for the subsequent read to report.
pub fn should_refresh(force: bool, cache_path: &Path) -> bool {
    if force {
        return true;
    }
    match fs::metadata(cache_path) {
        Ok(_) => false,
        Err(e) => e.kind() == ErrorKind::NotFound,
    }
}

fn listing_args(project_id: &str) -> [&str; 7] {
    [
        "monitoring",
        "dashboards",
        "list",
        "--project",
        project_id,
        "--format",
        "json",
    ]
}

/// Regenerates the project's cache from `<gcloud_bin> monitoring dashboards list`.
///
/// stdout is streamed into a temporary sibling of the cache file and moved
/// into place only once the command exits successfully.
pub fn refresh(store: &CacheStore, gcloud_bin: &str, project_id: &str) -> Result<PathBuf> {
    let cache_dir = store.cache_dir(project_id);
    CacheStore::ensure_dir(&cache_dir)?;

    let program = which::which(gcloud_bin)
        .map_err(|_| DigError::ListingCommandNotFound(gcloud_bin.to_owned()))?;

    let cache_path = store.cache_path(project_id);
    let tmp_path = cache_path.with_extension("json.tmp");
    let tmp_file = File::create(&tmp_path)
        .with_context(|| format!("Failed to create {}", tmp_path.display()))?;

    let status = Command::new(program)
        .args(listing_args(project_id))
        .stdout(Stdio::from(tmp_file))
        .stderr(Stdio::inherit())
        .stdin(Stdio::inherit())
        .status();

    let status = match status {
        Ok(status) => status,
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(e).with_context(|| format!("Failed to run {gcloud_bin}"));
        }
    };

    if !status.success() {
        let _ = fs::remove_file(&tmp_path);
        return Err(DigError::ListingCommandFailed(gcloud_bin.to_owned(), status).into());
    }

    fs::rename(&tmp_path, &cache_path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            cache_path.display()
        )
    })?;

    Ok(cache_path)
}
