use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use pkg_constants::labels::{VISIBILITY_CLUSTER_LOCAL, VISIBILITY_LABEL_KEY};

/// Identity of a route: the parts used for naming and domain resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

impl Route {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Whether the visibility label marks this route cluster-local.
    pub fn is_cluster_local(&self) -> bool {
        self.labels.get(VISIBILITY_LABEL_KEY).map(String::as_str) == Some(VISIBILITY_CLUSTER_LOCAL)
    }

    /// A copy of this route with the visibility label set (or removed).
    pub fn with_visibility(&self, cluster_local: bool) -> Self {
        let mut route = self.clone();
        if cluster_local {
            route.labels.insert(
                VISIBILITY_LABEL_KEY.to_string(),
                VISIBILITY_CLUSTER_LOCAL.to_string(),
            );
        } else {
            route.labels.remove(VISIBILITY_LABEL_KEY);
        }
        route
    }
}
