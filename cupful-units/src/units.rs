//! Built-in unit definitions - kitchen volume and weight

use std::sync::LazyLock;
use cupful_core::System::{Imperial, Metric};
use crate::{Unit, UnitRegistry};

/// Global read-only registry of the built-in units
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(builtin_registry);

/// Build the built-in registry. Factors are base units per unit.
pub fn builtin_registry() -> UnitRegistry {
    UnitRegistry::builder()
        // Volume, base milliliter
        .category("volume", "milliliter")
        .unit(Unit::new("milliliter", 1.0, Metric)
            .with_symbols(&["mL", "ml", "cc"])
            .with_names(&["milliliter", "millilitre", "cubic centimeter"]))
        .unit(Unit::new("liter", 1000.0, Metric)
            .with_symbols(&["L", "l"])
            .with_names(&["liter", "litre"]))
        .unit(Unit::new("deciliter", 100.0, Metric)
            .with_symbols(&["dL", "dl"])
            .with_names(&["deciliter", "decilitre"]))
        .unit(Unit::new("teaspoon", 5.0, Imperial)
            .with_symbols(&["tsp", "t"])
            .with_names(&["teaspoon"]))
        .unit(Unit::new("tablespoon", 15.0, Imperial)
            .with_symbols(&["tbsp", "T"])
            .with_names(&["tablespoon"]))
        .unit(Unit::new("cup", 237.0, Imperial)
            .with_symbols(&["cup", "c"])
            .with_names(&["cup"]))
        .unit(Unit::new("pint", 473.0, Imperial)
            .with_symbols(&["p", "pt"])
            .with_names(&["pint"]))
        .unit(Unit::new("quart", 946.0, Imperial)
            .with_symbols(&["q", "qt", "qrt"])
            .with_names(&["quart"]))
        .unit(Unit::new("gallon", 3785.0, Imperial)
            .with_symbols(&["gl", "gal"])
            .with_names(&["gallon"]))

        // Weight, base gram
        .category("weight", "gram")
        .unit(Unit::new("gram", 1.0, Metric)
            .with_symbols(&["g"])
            .with_names(&["gram", "gramme"]))
        .unit(Unit::new("milligram", 0.001, Metric)
            .with_symbols(&["mg"])
            .with_names(&["milligram", "milligramme"]))
        .unit(Unit::new("kilogram", 1000.0, Metric)
            .with_symbols(&["kg"])
            .with_names(&["kilogram", "kilogramme", "kilo"]))
        .unit(Unit::new("pound", 454.0, Imperial)
            .with_symbols(&["lb"])
            .with_names(&["pound"]))
        .unit(Unit::new("ounce", 28.0, Imperial)
            .with_symbols(&["oz"])
            .with_names(&["ounce"]))
        .build()
        .expect("built-in unit table is well-formed")
}
