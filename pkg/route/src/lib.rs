//! Translation of a route's traffic configuration into an ingress spec.
//!
//! Every builder here is a pure function: inputs are borrowed, outputs are
//! freshly allocated, and nothing is retained between calls. Rule and path
//! order is deterministic because the proxy evaluates paths first-match.

pub mod challenge;
pub mod domains;
pub mod error;
pub mod ingress;
pub mod path;
pub mod tags;

#[cfg(test)]
mod testutil;

pub use domains::{DomainResolver, TemplateDomainResolver};
pub use error::RouteError;
pub use ingress::{RoutingContext, make_ingress_spec, make_ingress_tls};
