use std::collections::HashMap;

use pkg_types::ingress::{
    HTTP01Challenge, HTTPIngressPath, HTTPIngressRuleValue, IngressBackend, IngressBackendSplit,
    IngressRule, IngressVisibility,
};

/// ACME challenges keyed by the host they validate.
pub type ChallengeHosts<'a> = HashMap<&'a str, &'a HTTP01Challenge>;

/// Index challenges by host. A later challenge for the same host wins.
pub fn challenge_hosts(challenges: &[HTTP01Challenge]) -> ChallengeHosts<'_> {
    challenges.iter().map(|c| (c.host.as_str(), c)).collect()
}

/// One challenge-serving path per host that has a registered challenge,
/// in host order.
pub fn make_acme_paths(challenges: &ChallengeHosts<'_>, hosts: &[String]) -> Vec<HTTPIngressPath> {
    hosts
        .iter()
        .filter_map(|host| challenges.get(host.as_str()))
        .map(|challenge| HTTPIngressPath {
            path: Some(challenge.path.clone()),
            splits: vec![IngressBackendSplit {
                backend: IngressBackend {
                    service_namespace: challenge.service_namespace.clone(),
                    service_name: challenge.service_name.clone(),
                    service_port: challenge.service_port,
                },
                percent: 100,
                append_headers: Default::default(),
            }],
            ..Default::default()
        })
        .collect()
}

/// Place challenge paths ahead of every other path of an external rule.
/// Cluster-local rules are returned unchanged.
pub fn with_acme_paths(challenges: &ChallengeHosts<'_>, rule: IngressRule) -> IngressRule {
    if rule.visibility != IngressVisibility::ExternalIP {
        return rule;
    }
    let mut paths = make_acme_paths(challenges, &rule.hosts);
    if paths.is_empty() {
        return rule;
    }
    paths.extend(rule.http.paths);
    IngressRule {
        http: HTTPIngressRuleValue { paths },
        ..rule
    }
}
