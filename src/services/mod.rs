//! Business logic layer
//!
//! Services sit between the CLI and storage.

pub mod profile;

pub use profile::ProfileService;
