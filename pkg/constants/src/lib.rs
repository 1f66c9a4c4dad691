//! Centralized constants for the routing workspace.
//!
//! Header names, ports, label keys, and default values live here so the
//! ingress builders and the downstream proxy agree on them byte-for-byte.

pub mod headers;
pub mod labels;
pub mod network;
