use anyhow::Result;
use regex::Regex;

use crate::entities::DashboardEntry;

/// Builds console URLs for dashboard entries.
///
/// Built-in dashboards open the resource-list view for their resource type:
/// `<base>/dashboards/resourceList/<type>?project=<id>`. Discovered ones open
/// the builder view for the last segment of their resource path:
/// `<base>/dashboards/builder/<dashboard id>?project=<id>`.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    console_base: String,
    dashboard_id: Regex,
}

impl UrlResolver {
    pub fn new(console_base: impl Into<String>) -> Result<Self> {
        Ok(Self {
            console_base: console_base.into(),
            // matches `/abc-123` in projects/${number}/dashboards/abc-123
            dashboard_id: Regex::new(r"/[a-zA-Z0-9\-]+$")?,
        })
    }

    pub fn resolve(&self, entry: &DashboardEntry, project_id: &str) -> String {
        if entry.builtin {
            return format!(
                "{}/dashboards/resourceList/{}?project={project_id}",
                self.console_base, entry.identifier
            );
        }

        // An identifier without a trailing id segment yields the bare builder URL.
        let segment = self
            .dashboard_id
            .find(&entry.identifier)
            .map(|m| m.as_str())
            .unwrap_or_default();
        format!(
            "{}/dashboards/builder{segment}?project={project_id}",
            self.console_base
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CONSOLE_BASE_URL;

    fn resolver() -> UrlResolver {
        UrlResolver::new(CONSOLE_BASE_URL).unwrap()
    }

    #[test]
    fn test_resolve_builtin() {
        let entry = DashboardEntry::builtin("VM Instances", "gce_instance");
        assert_eq!(
            resolver().resolve(&entry, "demo"),
            "https://console.cloud.google.com/monitoring/dashboards/resourceList/gce_instance?project=demo"
        );
    }

    #[test]
    fn test_resolve_discovered() {
        let entry = DashboardEntry::discovered("Frontend", "projects/123/dashboards/abc-456");
        assert_eq!(
            resolver().resolve(&entry, "demo"),
            "https://console.cloud.google.com/monitoring/dashboards/builder/abc-456?project=demo"
        );
    }

    #[test]
    fn test_resolve_discovered_without_id_segment() {
        let entry = DashboardEntry::discovered("Broken", "projects/123/dashboards/");
        assert_eq!(
            resolver().resolve(&entry, "demo"),
            "https://console.cloud.google.com/monitoring/dashboards/builder?project=demo"
        );
    }

    #[test]
    fn test_non_ascii_digits_are_not_an_id_segment() {
        let entry = DashboardEntry::discovered("Arabic", "projects/1/dashboards/\u{663}\u{664}");
        assert_eq!(
            resolver().resolve(&entry, "demo"),
            "https://console.cloud.google.com/monitoring/dashboards/builder?project=demo"
        );
    }

    #[test]
    fn test_discovered_identifier_that_looks_builtin() {
        // the builtin flag decides the template, not the identifier shape
        let entry = DashboardEntry::discovered("Odd", "gce_instance");
        assert_eq!(
            resolver().resolve(&entry, "demo"),
            "https://console.cloud.google.com/monitoring/dashboards/builder?project=demo"
        );
    }

    #[test]
    fn test_resolve_uses_configured_base() {
        let resolver = UrlResolver::new("http://localhost:8080/monitoring").unwrap();
        let entry = DashboardEntry::builtin("GKE", "kubernetes");
        assert_eq!(
            resolver.resolve(&entry, "p-1"),
            "http://localhost:8080/monitoring/dashboards/resourceList/kubernetes?project=p-1"
        );
    }
}
