//! Static data records read from the catalog

pub mod exit_device;
pub mod formula;
pub mod rail_spec;
pub mod representative;
pub mod territory;

pub use exit_device::{ExitDeviceModel, Handing, HandingTable, ProductCategory, Tutorial};
pub use formula::{DeviceFamily, DeviceFormula, ExtensionBase, ExtensionRule, RodFormulaTable};
pub use rail_spec::{Generation, GenerationSpec, RailFormulaTable, SizeClass, Stile};
pub use representative::{Brand, Representative, RepresentativeList};
pub use territory::TerritoryTable;
