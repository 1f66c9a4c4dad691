//! Fixtures shared by the unit tests.

use std::collections::HashMap;
use std::time::Duration;

use pkg_types::ingress::IngressVisibility;
use pkg_types::route::Route;
use pkg_types::traffic::{Protocol, RevisionTarget, RevisionTargets, TrafficConfig};

use crate::domains::DomainResolver;
use crate::error::RouteError;

pub fn make_target(revision: &str, percent: Option<u32>) -> RevisionTarget {
    RevisionTarget {
        revision_name: revision.to_string(),
        service_name: revision.to_string(),
        protocol: Protocol::Http1,
        percent,
        ..Default::default()
    }
}

pub fn make_timed_target(revision: &str, percent: u32, timeout_secs: u64) -> RevisionTarget {
    RevisionTarget {
        timeout: Some(Duration::from_secs(timeout_secs)),
        ..make_target(revision, Some(percent))
    }
}

pub fn make_traffic(targets: &[(&str, RevisionTargets)]) -> TrafficConfig {
    TrafficConfig {
        targets: targets
            .iter()
            .map(|(name, t)| (name.to_string(), t.clone()))
            .collect(),
        visibility: HashMap::new(),
    }
}

/// `<target>.<namespace>.local` for cluster-local, `<target>.<namespace>.example.com` otherwise.
pub struct StaticDomains;

impl DomainResolver for StaticDomains {
    fn resolve(
        &self,
        target: &str,
        route: &Route,
        visibility: IngressVisibility,
    ) -> Result<String, RouteError> {
        let suffix = match visibility {
            IngressVisibility::ClusterLocal => "local",
            IngressVisibility::ExternalIP => "example.com",
        };
        Ok(format!("{}.{}.{}", target, route.namespace, suffix))
    }
}

/// Fails for one target name, resolves the rest like `StaticDomains`.
pub struct FailingDomains(pub &'static str);

impl DomainResolver for FailingDomains {
    fn resolve(
        &self,
        target: &str,
        route: &Route,
        visibility: IngressVisibility,
    ) -> Result<String, RouteError> {
        if target == self.0 {
            return Err(RouteError::domain_resolution(
                target,
                visibility,
                "template rendered an invalid hostname",
            ));
        }
        StaticDomains.resolve(target, route, visibility)
    }
}
