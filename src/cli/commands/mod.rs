//! CLI command implementations

pub mod completions;
pub mod config;
pub mod csr;
pub mod handing;
pub mod rail;
pub mod rod;
