use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use pkg_constants::network::{SERVICE_HTTP2_PORT, SERVICE_HTTP_PORT};

use crate::ingress::IngressVisibility;

/// Application protocol a revision speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Http1,
    H2c,
}

impl Protocol {
    /// Public service port for this protocol.
    /// Must match the activator's port so handoff between the two is seamless.
    pub fn service_port(self) -> u16 {
        match self {
            Protocol::Http1 => SERVICE_HTTP_PORT,
            Protocol::H2c => SERVICE_HTTP2_PORT,
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Http1 => write!(f, "http1"),
            Protocol::H2c => write!(f, "h2c"),
        }
    }
}

/// One weighted backend of a named traffic target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionTarget {
    /// Tag this target was declared under, if any
    #[serde(default)]
    pub tag: Option<String>,
    pub revision_name: String,
    #[serde(default)]
    pub configuration_name: Option<String>,
    /// Whether the target follows the configuration's latest ready revision
    #[serde(default)]
    pub latest_revision: Option<bool>,
    pub service_name: String,
    #[serde(default)]
    pub protocol: Protocol,
    /// Share of traffic (0-100); `None` and `Some(0)` both mean no traffic
    #[serde(default)]
    pub percent: Option<u32>,
    #[serde(default)]
    pub timeout: Option<Duration>,
}

impl RevisionTarget {
    /// Whether this target carries any traffic.
    pub fn has_traffic(&self) -> bool {
        matches!(self.percent, Some(p) if p > 0)
    }
}

/// Targets sharing one tag name, in declaration order.
pub type RevisionTargets = Vec<RevisionTarget>;

/// Resolved traffic of a route: targets grouped by tag name, plus the
/// visibility of each tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficConfig {
    #[serde(default)]
    pub targets: HashMap<String, RevisionTargets>,
    /// Partial; tags without an entry are externally visible
    #[serde(default)]
    pub visibility: HashMap<String, IngressVisibility>,
}

impl TrafficConfig {
    /// Tag names in lexicographic order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.targets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Visibilities a tag is published under, cluster-local first.
    pub fn visibilities(&self, name: &str) -> Vec<IngressVisibility> {
        let mut visibilities = vec![IngressVisibility::ClusterLocal];
        match self.visibility.get(name) {
            None | Some(IngressVisibility::ExternalIP) => {
                visibilities.push(IngressVisibility::ExternalIP)
            }
            Some(IngressVisibility::ClusterLocal) => {}
        }
        visibilities
    }
}
