//! Follower graph and post visibility backend.
//!
//! Layout follows a hexagonal split: [`domain`] holds the aggregates, the
//! port traits, and the services; [`inbound`] and [`outbound`] adapt them to
//! HTTP and storage; [`server`] wires everything together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
#[cfg(test)]
mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
