use serde::{Deserialize, Serialize};
use std::time::Duration;

use pkg_constants::network::{
    CLUSTER_LOCAL_DOMAIN, DEFAULT_DOMAIN, DEFAULT_DOMAIN_TEMPLATE, DEFAULT_REVISION_TIMEOUT_SECS,
    DEFAULT_TAG_TEMPLATE,
};

/// Network-wide routing settings.
///
/// Deserializes from the network section of a routing config, e.g.:
/// ```yaml
/// tag-header-based-routing: true
/// default-domain: example.com
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Route requests carrying the tag header to the tagged target
    #[serde(default, alias = "tag-header-based-routing")]
    pub tag_header_based_routing: bool,
    #[serde(default = "default_domain_template", alias = "domain-template")]
    pub domain_template: String,
    #[serde(default = "default_tag_template", alias = "tag-template")]
    pub tag_template: String,
    #[serde(default = "default_domain", alias = "default-domain")]
    pub default_domain: String,
    #[serde(default = "default_cluster_local_domain", alias = "cluster-local-domain")]
    pub cluster_local_domain: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            tag_header_based_routing: false,
            domain_template: default_domain_template(),
            tag_template: default_tag_template(),
            default_domain: default_domain(),
            cluster_local_domain: default_cluster_local_domain(),
        }
    }
}

fn default_domain_template() -> String {
    DEFAULT_DOMAIN_TEMPLATE.to_string()
}

fn default_tag_template() -> String {
    DEFAULT_TAG_TEMPLATE.to_string()
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_cluster_local_domain() -> String {
    CLUSTER_LOCAL_DOMAIN.to_string()
}

/// Defaults applied to revisions that don't set their own values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_revision_timeout", alias = "revision-timeout-seconds")]
    pub revision_timeout_seconds: u64,
}

impl Defaults {
    pub fn revision_timeout(&self) -> Duration {
        Duration::from_secs(self.revision_timeout_seconds)
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            revision_timeout_seconds: default_revision_timeout(),
        }
    }
}

fn default_revision_timeout() -> u64 {
    DEFAULT_REVISION_TIMEOUT_SECS
}
