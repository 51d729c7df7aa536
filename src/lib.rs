//! doorkit: door hardware support toolkit
//!
//! Cut-length calculators for vertical rods, crossbars and exit device rails,
//! a handing classifier, and a territory search over the customer support
//! directory. Everything reads from a static catalog; nothing is written.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;
