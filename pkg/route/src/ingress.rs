use tracing::{debug, info, warn};

use pkg_types::config::{Defaults, NetworkConfig};
use pkg_types::ingress::{
    Certificate, HTTP01Challenge, HTTPIngressRuleValue, IngressRule, IngressSpec, IngressTLS,
};
use pkg_types::route::Route;
use pkg_types::traffic::TrafficConfig;

use crate::challenge::{challenge_hosts, with_acme_paths};
use crate::domains::DomainResolver;
use crate::error::RouteError;
use crate::path::make_base_path;
use crate::tags::make_tag_routed_paths;

/// Read-only settings shared by every rule built for one route.
#[derive(Clone, Copy)]
pub struct RoutingContext<'a> {
    pub network: &'a NetworkConfig,
    pub defaults: &'a Defaults,
    pub domains: &'a dyn DomainResolver,
}

/// Build the TLS entry serving `hosts` from a certificate's secret.
pub fn make_ingress_tls(cert: &Certificate, hosts: Vec<String>) -> IngressTLS {
    IngressTLS {
        hosts,
        secret_name: cert.secret_name.clone(),
        secret_namespace: cert.namespace.clone(),
    }
}

/// Build the ingress spec routing `route`'s traffic.
///
/// Rules are emitted per tag name in lexicographic order, cluster-local
/// before external. The first domain resolution failure aborts the build.
/// `tls` is copied into the spec unchanged.
pub fn make_ingress_spec(
    ctx: &RoutingContext<'_>,
    route: &Route,
    traffic: &TrafficConfig,
    tls: &[IngressTLS],
    acme_challenges: &[HTTP01Challenge],
) -> Result<IngressSpec, RouteError> {
    let names = traffic.sorted_names();
    let challenges = challenge_hosts(acme_challenges);
    let mut rules = Vec::with_capacity(names.len() * 2);

    for name in &names {
        let targets = traffic
            .targets
            .get(*name)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for visibility in traffic.visibilities(name) {
            let domain = ctx
                .domains
                .resolve(name, route, visibility)
                .inspect_err(|e| {
                    warn!(
                        "Route {}/{}: domain resolution failed: {}",
                        route.namespace, route.name, e
                    )
                })?;

            let base = make_base_path(&route.namespace, targets, ctx.defaults);
            let paths = if ctx.network.tag_header_based_routing {
                make_tag_routed_paths(name, base, &route.namespace, traffic, &names, ctx.defaults)
            } else {
                vec![base]
            };
            let rule = with_acme_paths(
                &challenges,
                IngressRule {
                    hosts: vec![domain],
                    visibility,
                    http: HTTPIngressRuleValue { paths },
                },
            );

            debug!(
                "Route {}/{}: rule hosts={:?} visibility={} paths={}",
                route.namespace,
                route.name,
                rule.hosts,
                rule.visibility,
                rule.http.paths.len()
            );
            rules.push(rule);
        }
    }

    info!(
        "Route {}/{}: built ingress spec with {} rules",
        route.namespace,
        route.name,
        rules.len()
    );

    Ok(IngressSpec {
        rules,
        tls: tls.to_vec(),
    })
}
