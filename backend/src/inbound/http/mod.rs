//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod followers;
pub mod health;
pub mod posts;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
