use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Whether an Ingress rule is reachable only inside the cluster or also externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IngressVisibility {
    ClusterLocal,
    ExternalIP,
}

impl std::fmt::Display for IngressVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngressVisibility::ClusterLocal => write!(f, "ClusterLocal"),
            IngressVisibility::ExternalIP => write!(f, "ExternalIP"),
        }
    }
}

/// Backend service target for an Ingress path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressBackend {
    pub service_namespace: String,
    pub service_name: String,
    pub service_port: u16,
}

/// A weighted fraction of a path's traffic sent to one backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressBackendSplit {
    #[serde(flatten)]
    pub backend: IngressBackend,
    /// Share of traffic (0-100)
    pub percent: u32,
    /// Headers added to requests forwarded to this backend
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub append_headers: BTreeMap<String, String>,
}

/// Exact-match predicate on a request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMatch {
    pub exact: String,
}

/// A single path within an Ingress HTTP rule.
///
/// Paths are evaluated first-match by the proxy, so their order inside
/// `HTTPIngressRuleValue::paths` is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HTTPIngressPath {
    /// URL path this entry is restricted to (ACME challenge paths only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Header name → exact-match predicate
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, HeaderMatch>,
    pub splits: Vec<IngressBackendSplit>,
    /// Headers added to every request matching this path
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub append_headers: BTreeMap<String, String>,
    /// Explicit request timeout; unset means the proxy default applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

/// HTTP paths for a host rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HTTPIngressRuleValue {
    pub paths: Vec<HTTPIngressPath>,
}

/// A host-matching Ingress rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressRule {
    pub hosts: Vec<String>,
    pub visibility: IngressVisibility,
    pub http: HTTPIngressRuleValue,
}

/// TLS configuration for an Ingress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressTLS {
    pub hosts: Vec<String>,
    pub secret_name: String,
    pub secret_namespace: String,
}

/// Ingress specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressSpec {
    pub rules: Vec<IngressRule>,
    #[serde(default)]
    pub tls: Vec<IngressTLS>,
}

/// An ACME HTTP-01 challenge that must be served for `host` at `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HTTP01Challenge {
    pub host: String,
    pub path: String,
    pub service_namespace: String,
    pub service_name: String,
    pub service_port: u16,
}

/// Certificate provisioned for a route's hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub dns_names: Vec<String>,
    pub secret_name: String,
}
