//! Label keys and values set on route identities.

/// Label marking a route (or a copy of it) as reachable only inside the cluster.
pub const VISIBILITY_LABEL_KEY: &str = "networking.knative.dev/visibility";

/// Value of `VISIBILITY_LABEL_KEY` for cluster-local routes.
pub const VISIBILITY_CLUSTER_LOCAL: &str = "cluster-local";
