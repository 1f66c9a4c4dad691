use minijinja::{Environment, UndefinedBehavior, context};

use pkg_constants::network::DEFAULT_TARGET;
use pkg_types::config::NetworkConfig;
use pkg_types::ingress::IngressVisibility;
use pkg_types::route::Route;
use pkg_types::validate::validate_hostname;

use crate::error::RouteError;

/// Resolves the fully-qualified hostname a target is published under.
///
/// One resolver may serve concurrent builds, so implementations must be
/// shareable across threads.
pub trait DomainResolver: Send + Sync {
    fn resolve(
        &self,
        target: &str,
        route: &Route,
        visibility: IngressVisibility,
    ) -> Result<String, RouteError>;
}

/// Resolves domains by rendering the configured tag and domain templates.
///
/// Templates use Go-style field references: `{{.Name}}`, `{{.Namespace}}`,
/// `{{.Domain}}`, `{{.Tag}}` and `{{.Annotations.<key>}}`. The tag template
/// only sees `Name` and `Tag`. Undefined fields are errors.
#[derive(Debug, Clone)]
pub struct TemplateDomainResolver {
    network: NetworkConfig,
    env: Environment<'static>,
}

impl Default for TemplateDomainResolver {
    fn default() -> Self {
        Self::new(NetworkConfig::default())
    }
}

impl TemplateDomainResolver {
    pub fn new(network: NetworkConfig) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { network, env }
    }

    /// Hostname (first DNS label) for a target of the route.
    fn hostname(&self, route: &Route, target: &str) -> Result<String, String> {
        if target == DEFAULT_TARGET {
            return Ok(route.name.clone());
        }
        self.render(
            &self.network.tag_template,
            context! {
                Name => &route.name,
                Tag => target,
            },
        )
    }

    fn domain_suffix(&self, route: &Route) -> &str {
        if route.is_cluster_local() {
            &self.network.cluster_local_domain
        } else {
            &self.network.default_domain
        }
    }

    fn render(&self, template: &str, ctx: minijinja::Value) -> Result<String, String> {
        self.env
            .render_str(&normalize_field_refs(template), ctx)
            .map_err(|e| format!("failed to render template '{}': {}", template, e))
    }
}

impl DomainResolver for TemplateDomainResolver {
    fn resolve(
        &self,
        target: &str,
        route: &Route,
        visibility: IngressVisibility,
    ) -> Result<String, RouteError> {
        let fail = |reason: String| RouteError::domain_resolution(target, visibility, reason);

        let hostname = self.hostname(route, target).map_err(fail)?;

        let route = route.with_visibility(visibility == IngressVisibility::ClusterLocal);
        let domain = self
            .render(
                &self.network.domain_template,
                context! {
                    Name => &hostname,
                    Namespace => &route.namespace,
                    Domain => self.domain_suffix(&route),
                    Annotations => &route.annotations,
                },
            )
            .map_err(fail)?;

        validate_hostname(&domain).map_err(|e| fail(e.to_string()))?;
        Ok(domain)
    }
}

/// Rewrite Go-style `{{ .Field }}` references to `{{ Field }}`.
/// Anything that doesn't close is left for the template parser to reject.
fn normalize_field_refs(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let expr = after[..end].trim();
        out.push_str("{{ ");
        out.push_str(expr.strip_prefix('.').unwrap_or(expr));
        out.push_str(" }}");
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}
