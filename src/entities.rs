use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A monitoring dashboard the operator can pick.
///
/// Discovered dashboards carry their full resource path
/// (`projects/<num>/dashboards/<id>`) as the identifier, built-in ones a
/// resource type such as `gce_instance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardEntry {
    #[serde(default)]
    pub display_name: String,
    #[serde(rename = "name", default)]
    pub identifier: String,
    #[serde(skip)]
    pub builtin: bool,
}

impl DashboardEntry {
    pub fn discovered(display_name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            identifier: identifier.into(),
            builtin: false,
        }
    }

    pub fn builtin(display_name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            identifier: identifier.into(),
            builtin: true,
        }
    }
}

impl Display for DashboardEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}
