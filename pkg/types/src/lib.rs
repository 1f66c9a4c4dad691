//! Data model for route traffic configuration and the ingress spec it
//! translates into.

pub mod config;
pub mod ingress;
pub mod route;
pub mod traffic;
pub mod validate;
