//! Header names appended to or matched on ingress paths.
//!
//! These are read by the downstream proxy and must not change.

/// Set to `"true"` on the path reached through the default route.
pub const DEFAULT_ROUTE_HEADER_NAME: &str = "Knative-Serving-Default-Route";

/// Carries the tag name. Matched on tag routing paths, appended on tag hosts.
pub const TAG_HEADER_NAME: &str = "Knative-Serving-Tag";

/// Name of the revision a split forwards to.
pub const REVISION_HEADER_NAME: &str = "Knative-Serving-Revision";

/// Namespace of the revision a split forwards to.
pub const REVISION_HEADER_NAMESPACE: &str = "Knative-Serving-Namespace";
