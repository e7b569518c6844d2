use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigError {
    #[error("Unable to get home directory. Set CLOUDMONITORING_DIG_HOME to choose a cache location.")]
    NoHomeDirectory,

    #[error("`{0}` was not found on PATH. Install the Google Cloud SDK or set CLOUDMONITORING_DIG_GCLOUD.")]
    ListingCommandNotFound(String),

    #[error("`{0} monitoring dashboards list` failed ({1})")]
    ListingCommandFailed(String, ExitStatus),

    #[error("Cache entry {0} has neither a displayName nor a name")]
    MalformedEntry(usize),

    #[error("Selecting a dashboard is only available in interactive mode. Use a terminal.")]
    NonInteractive,
}
