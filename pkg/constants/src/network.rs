//! Network-related constants.

// ─── Service ports ────────────────────────────────────────────────────────

/// Public service port for HTTP/1 revisions.
pub const SERVICE_HTTP_PORT: u16 = 80;

/// Public service port for cleartext HTTP/2 (h2c) revisions.
pub const SERVICE_HTTP2_PORT: u16 = 81;

// ─── Traffic ──────────────────────────────────────────────────────────────

/// Target name that receives untagged traffic.
pub const DEFAULT_TARGET: &str = "default";

/// Default revision request timeout, in seconds.
pub const DEFAULT_REVISION_TIMEOUT_SECS: u64 = 300;

// ─── Domains ──────────────────────────────────────────────────────────────

/// Domain suffix for externally visible routes.
pub const DEFAULT_DOMAIN: &str = "example.com";

/// Domain suffix for cluster-local routes.
pub const CLUSTER_LOCAL_DOMAIN: &str = "svc.cluster.local";

/// Template for a route's fully-qualified domain name.
pub const DEFAULT_DOMAIN_TEMPLATE: &str = "{{.Name}}.{{.Namespace}}.{{.Domain}}";

/// Template for the hostname of a tagged target.
pub const DEFAULT_TAG_TEMPLATE: &str = "{{.Name}}-{{.Tag}}";
