//! Command-line value enums
//!
//! Thin `clap::ValueEnum` wrappers over the library types so the core stays
//! free of CLI concerns.

use clap::ValueEnum;

use crate::core::rod::DeviceType;
use crate::core::search::SortMode;
use crate::entities::exit_device::ProductCategory;
use crate::entities::formula::DeviceFamily;
use crate::entities::rail_spec::{Generation, Stile};
use crate::entities::representative::Brand;

/// Device type for rod calculations
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DeviceArg {
    /// Concealed vertical rod
    Cvr,
    /// Surface vertical rod
    Svr,
    /// Crossbar only for 90 series (no rods)
    Crossbar,
}

impl From<DeviceArg> for DeviceType {
    fn from(arg: DeviceArg) -> Self {
        match arg {
            DeviceArg::Cvr => DeviceType::Cvr,
            DeviceArg::Svr => DeviceType::Svr,
            DeviceArg::Crossbar => DeviceType::Crossbar,
        }
    }
}

/// Rod family filter for series listings
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum FamilyFilter {
    Cvr,
    Svr,
    /// Both families - default
    #[default]
    All,
}

impl FamilyFilter {
    pub fn matches(&self, family: DeviceFamily) -> bool {
        match self {
            FamilyFilter::Cvr => family == DeviceFamily::Cvr,
            FamilyFilter::Svr => family == DeviceFamily::Svr,
            FamilyFilter::All => true,
        }
    }
}

/// Brand filter for representative searches
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum BrandFilter {
    Sargent,
    CorbinRusswin,
    Accentra,
    NortonRixson,
    /// Every brand - default
    #[default]
    All,
}

impl BrandFilter {
    /// The brand to restrict to, `None` for all
    pub fn brand(&self) -> Option<Brand> {
        match self {
            BrandFilter::Sargent => Some(Brand::Sargent),
            BrandFilter::CorbinRusswin => Some(Brand::CorbinRusswin),
            BrandFilter::Accentra => Some(Brand::Accentra),
            BrandFilter::NortonRixson => Some(Brand::NortonRixson),
            BrandFilter::All => None,
        }
    }
}

impl std::fmt::Display for BrandFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.brand() {
            Some(brand) => write!(f, "{}", brand),
            None => write!(f, "All"),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum GenerationArg {
    /// 80 Series (standard device)
    #[value(name = "80")]
    Series80,
    /// PE80 Series (NextGen device)
    Pe80,
}

impl From<GenerationArg> for Generation {
    fn from(arg: GenerationArg) -> Self {
        match arg {
            GenerationArg::Series80 => Generation::Series80,
            GenerationArg::Pe80 => Generation::Pe80,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum StileArg {
    /// Narrow stile (8300/8400/8500)
    Narrow,
    /// Wide stile (8600/8700/8800/8900)
    Wide,
}

impl From<StileArg> for Stile {
    fn from(arg: StileArg) -> Self {
        match arg {
            StileArg::Narrow => Stile::Narrow,
            StileArg::Wide => Stile::Wide,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CategoryArg {
    /// Exit device (80/90/20/30 series)
    Exit,
    /// Mortise lock (8200 / R8200)
    Mortise,
    /// Bored lock (10-Line / 11-Line)
    Bored,
}

impl From<CategoryArg> for ProductCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Exit => ProductCategory::Exit,
            CategoryArg::Mortise => ProductCategory::Mortise,
            CategoryArg::Bored => ProductCategory::Bored,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SortArg {
    /// Home brand first, then by name
    Brand,
    /// Most specific match first
    Relevance,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Brand => SortMode::Brand,
            SortArg::Relevance => SortMode::Relevance,
        }
    }
}
