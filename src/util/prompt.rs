use std::fmt::Display;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use crate::{
    config::Configs,
    consts::SELECT_DASHBOARD,
    entities::DashboardEntry,
    errors::DigError,
};

pub fn prompt_options_skippable<T: Display>(message: &str, options: Vec<T>) -> Result<Option<T>> {
    let select = inquire::Select::new(message, options);
    select
        .with_render_config(Configs::get_render_config())
        .with_page_size(15)
        .prompt_skippable()
        .context("Failed to prompt for options")
}

/// Fuzzy-select a dashboard by its display name. `None` when the prompt is
/// dismissed with Esc.
pub fn prompt_dashboard(dashboards: &[DashboardEntry]) -> Result<Option<&DashboardEntry>> {
    interact_or!(DigError::NonInteractive);
    prompt_options_skippable(SELECT_DASHBOARD, dashboards.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_requires_terminal() {
        if std::io::stderr().is_terminal() {
            return;
        }
        let dashboards = vec![DashboardEntry::builtin("GKE", "kubernetes")];
        let err = prompt_dashboard(&dashboards).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DigError>(),
            Some(DigError::NonInteractive)
        ));
    }
}
