//! Outbound adapters implementing the repository ports.
//!
//! - **memory**: single-process store, the default when no database is
//!   configured.
//! - **persistence**: PostgreSQL repositories using Diesel.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business rules.

pub mod memory;
pub mod persistence;
