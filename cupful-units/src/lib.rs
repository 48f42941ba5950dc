//! Cupful Units - Kitchen Unit Conversion
//!
//! Converts an amount given in one unit into every unit of its category and
//! picks the most sensible one for display (3785 mL → 1 gallon).
//!
//! Pipeline:
//! - Resolve: token ("cups", "tbsp", "litre") → category and unit
//! - Convert: amount → the same amount in every unit of the category
//! - Select: all units → one whole-number or shortest-fraction result
//!
//! Categories (built-in):
//! - Volume (mL, L, dL, tsp, tbsp, cup, pt, qt, gal)
//! - Weight (g, mg, kg, lb, oz)
//!
//! The free functions work on the built-in `REGISTRY`; the same operations
//! are methods on `UnitRegistry` for custom registries.

mod unit;
mod registry;
mod units;
mod resolve;
mod convert;
mod sensible;

use std::collections::BTreeSet;

pub use unit::Unit;
pub use registry::{Category, CategoryId, Collision, RegistryBuilder, UnitRegistry};
pub use units::{builtin_registry, REGISTRY};
pub use convert::{AllUnits, ConversionResult};
pub use sensible::{DisplayAmount, DisplayResult, SensibleOptions};
pub use cupful_core::{codes, ConversionError, ErrorReport, Fraction, Result, System};

/// Built-in category names in definition order
pub fn categories() -> Vec<&'static str> {
    REGISTRY.categories().collect()
}

/// Built-in units of a category, in definition order
pub fn units_of(category: &str) -> Result<&'static [Unit]> {
    REGISTRY.units_of(category)
}

/// Built-in unit of a category by canonical name
pub fn unit_of(category: &str, name: &str) -> Result<&'static Unit> {
    REGISTRY.unit_of(category, name)
}

/// Built-in categories with a unit named by the token (or its singular)
pub fn categories_matching(unit: &str) -> BTreeSet<&'static str> {
    REGISTRY.categories_matching(unit)
}

/// Resolve a token to a built-in unit of the given category
pub fn resolve_unit(amount: f64, unit: &str, category: &str) -> Result<&'static Unit> {
    REGISTRY.resolve_unit(amount, unit, category)
}

/// Express an amount in every built-in unit of its category
pub fn convert_to_all_units(amount: f64, unit: &str, category: &str) -> Result<AllUnits> {
    REGISTRY.convert_to_all_units(amount, unit, category)
}

/// Pick the most sensible built-in unit for displaying an amount
pub fn select_sensible(options: &SensibleOptions) -> Result<DisplayResult> {
    REGISTRY.select_sensible(options)
}
