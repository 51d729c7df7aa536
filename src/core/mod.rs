//! Core module - lookup tables, calculators and search

pub mod catalog;
pub mod config;
pub mod error;
pub mod handing;
pub mod measure;
pub mod rail;
pub mod rod;
pub mod search;

pub use catalog::{Catalog, CatalogError};
pub use config::{Config, ConfigError};
pub use error::CalcError;
pub use handing::{classify_handing, HandingResult};
pub use measure::{round_up_quarter, Inches};
pub use rail::{calculate_rail, RailRequest, RailResult, RailSizing};
pub use rod::{calculate, DeviceType, RodRequest, RodResult};
pub use search::{highlight_terms, Directory, DirectoryEntry, SearchOptions, SortMode};
