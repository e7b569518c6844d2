pub const CONSOLE_BASE_URL: &str = "https://console.cloud.google.com/monitoring";

pub const BASE_DIR_NAME: &str = ".cloudmonitoring_dig";
pub const CACHE_FILE_NAME: &str = "cache.json";
pub const DEFAULT_GCLOUD_BIN: &str = "gcloud";

pub const HOME_ENV: &str = "CLOUDMONITORING_DIG_HOME";
pub const GCLOUD_ENV: &str = "CLOUDMONITORING_DIG_GCLOUD";

/// Resource-list dashboards the console ships for every project, as
/// `(display name, resource type)`.
pub const BUILTIN_DASHBOARDS: &[(&str, &str)] = &[
    ("App Engine", "gae_application"),
    ("BigQuery", "bigquery_dataset"),
    ("Cloud Spanner", "spanner_instance"),
    ("Cloud SQL", "cloudsql_database"),
    ("Cloud Storage", "gcs_bucket"),
    ("Dataflow", "dataflow_job"),
    ("Disks", "gce_disk"),
    ("External HTTP(S) Load Balancers", "l7_lb_rule"),
    ("Firewalls", "compute_firewall"),
    ("GKE", "kubernetes"),
    ("Google Cloud Load Balancers", "loadbalancing"),
    ("Infrastructure Summary", "infrastructure"),
    ("Network Security Policies", "network_security_policy"),
    ("Pub/Sub", "pubsub_topic"),
    ("VM Instances", "gce_instance"),
];

pub const MISSING_PROJECT: &str = "require flag '-p'. project id must be set";
pub const SELECT_DASHBOARD: &str = "Select a dashboard";
