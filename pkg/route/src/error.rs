//! Error types for ingress construction

use pkg_types::ingress::IngressVisibility;
use thiserror::Error;

/// Failure while building an ingress spec.
///
/// Construction is all-or-nothing: the first error aborts it and no
/// partial spec is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The domain for a target could not be resolved
    #[error("failed to resolve {visibility} domain for target '{target}': {reason}")]
    DomainResolution {
        target: String,
        visibility: IngressVisibility,
        reason: String,
    },
}

impl RouteError {
    /// Create a domain resolution error
    pub fn domain_resolution(
        target: impl Into<String>,
        visibility: IngressVisibility,
        reason: impl Into<String>,
    ) -> Self {
        Self::DomainResolution {
            target: target.into(),
            visibility,
            reason: reason.into(),
        }
    }
}
