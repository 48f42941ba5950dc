//! Unit representation with its conversion factor

use std::fmt;
use serde::{Serialize, Deserialize};
use cupful_core::System;

/// A unit of measure inside one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Canonical name, unique within its category (e.g., "cup")
    pub name: String,
    /// Base units per one of this unit (value_base = value * in_base)
    pub in_base: f64,
    /// Accepted symbols; the first one is the display symbol
    pub symbols: Vec<String>,
    /// Accepted spelled-out names (e.g., "litre" for liter)
    pub names: Vec<String>,
    /// Measurement system used for display filtering
    pub system: System,
}

impl Unit {
    pub fn new(name: &str, in_base: f64, system: System) -> Self {
        Unit {
            name: name.to_string(),
            in_base,
            symbols: Vec::new(),
            names: Vec::new(),
            system,
        }
    }

    pub fn with_symbols(mut self, symbols: &[&str]) -> Self {
        self.symbols = symbols.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_names(mut self, names: &[&str]) -> Self {
        self.names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Canonical name, then names, then symbols
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.names.iter().map(String::as_str))
            .chain(self.symbols.iter().map(String::as_str))
    }

    /// Check if this is its category's base unit
    pub fn is_base(&self) -> bool {
        self.in_base == 1.0
    }

    /// Convert a value from this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.in_base
    }

    /// Convert a value from the category's base unit to this unit
    pub fn from_base(&self, value_base: f64) -> f64 {
        value_base / self.in_base
    }

    /// Label shown to humans: first symbol or canonical name
    pub fn label(&self, use_symbol: bool) -> &str {
        display_label(&self.name, &self.symbols, use_symbol)
    }
}

/// First symbol when requested and present, otherwise the canonical name
pub(crate) fn display_label<'a>(name: &'a str, symbols: &'a [String], use_symbol: bool) -> &'a str {
    match symbols.first() {
        Some(symbol) if use_symbol => symbol,
        _ => name,
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn liter() -> Unit {
        Unit::new("liter", 1000.0, System::Metric)
            .with_symbols(&["L", "l"])
            .with_names(&["liter", "litre"])
    }

    #[test]
    fn test_base_unit() {
        let ml = Unit::new("milliliter", 1.0, System::Metric);
        assert!(ml.is_base());
        assert!(!liter().is_base());
    }

    #[test]
    fn test_to_and_from_base() {
        let l = liter();
        assert_eq!(l.to_base(2.5), 2500.0);
        assert_eq!(l.from_base(500.0), 0.5);
    }

    #[test]
    fn test_tokens() {
        let unit = liter();
        let tokens: Vec<&str> = unit.tokens().collect();
        assert_eq!(tokens, vec!["liter", "liter", "litre", "L", "l"]);
    }

    #[test]
    fn test_label() {
        let l = liter();
        assert_eq!(l.label(false), "liter");
        assert_eq!(l.label(true), "L");

        // No symbols: fall back to the name
        let bare = Unit::new("pinch", 0.3, System::Imperial);
        assert_eq!(bare.label(true), "pinch");
    }

    #[test]
    fn test_display_label() {
        let symbols = vec!["tsp".to_string(), "t".to_string()];
        assert_eq!(display_label("teaspoon", &symbols, true), "tsp");
        assert_eq!(display_label("teaspoon", &symbols, false), "teaspoon");
        assert_eq!(display_label("pinch", &[], true), "pinch");
    }
}
