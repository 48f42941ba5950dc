//! Unit token resolution - map "cups", "tbsp" or "litre" to registry units
//!
//! All free-form string matching happens here. A token matches a unit when it
//! equals the canonical name, one of the names, or one of the symbols
//! (case-sensitive: "t" is teaspoon, "T" is tablespoon). A token ending in
//! "s" is also tried with that single "s" removed; no other plural forms are
//! understood.

use std::collections::BTreeSet;
use tracing::debug;
use cupful_core::{ConversionError, Result};
use crate::registry::{Category, CategoryId};
use crate::{Unit, UnitRegistry};

/// Check whether a unit answers to a token
fn answers_to(unit: &Unit, token: &str) -> bool {
    unit.tokens().any(|t| t == token)
}

/// Singular form of a token, if it ends in a plural "s"
fn singular(token: &str) -> Option<&str> {
    token.strip_suffix('s')
}

fn matching_units<'r>(category: &'r Category, token: &str) -> Vec<&'r Unit> {
    category.units().iter().filter(|u| answers_to(u, token)).collect()
}

impl UnitRegistry {
    /// Every category holding a unit that answers to the token or its singular
    pub fn categories_matching(&self, token: &str) -> BTreeSet<&str> {
        let forms: Vec<&str> = std::iter::once(token).chain(singular(token)).collect();

        let found: BTreeSet<&str> = self
            .iter()
            .filter(|(_, c)| c.units().iter().any(|u| forms.iter().any(|f| answers_to(u, f))))
            .map(|(_, c)| c.name())
            .collect();

        debug!(token, categories = ?found, "matched categories");
        found
    }

    /// Resolve a token to the single unit it names inside a category.
    ///
    /// Fails with `UnknownCategory`, `UnitNotFound`, `AmbiguousUnit` or
    /// `InvalidAmount` (checked in that order).
    pub fn resolve_unit(&self, amount: f64, token: &str, category: &str) -> Result<&Unit> {
        let id = self.category_id(category)?;
        self.resolve_in(id, amount, token)
    }

    pub(crate) fn resolve_in(&self, id: CategoryId, amount: f64, token: &str) -> Result<&Unit> {
        let category = self.category_ref(id)?;

        // Exact matches win over the singular fallback
        let mut matches = matching_units(category, token);
        if matches.is_empty() {
            if let Some(single) = singular(token) {
                matches = matching_units(category, single);
            }
        }

        let unit = match matches.as_slice() {
            [] => {
                return Err(ConversionError::UnitNotFound {
                    token: token.to_string(),
                    category: category.name().to_string(),
                })
            }
            [unit] => *unit,
            many => {
                return Err(ConversionError::AmbiguousUnit {
                    token: token.to_string(),
                    category: category.name().to_string(),
                    candidates: many.iter().map(|u| u.name.clone()).collect(),
                })
            }
        };

        if !amount.is_finite() {
            return Err(ConversionError::InvalidAmount { amount });
        }

        debug!(token, category = category.name(), unit = %unit.name, "resolved unit");
        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cupful_core::System;
    use crate::REGISTRY;

    fn set<'a>(items: &[&'a str]) -> BTreeSet<&'a str> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_categories_matching_name_symbol_and_alias() {
        assert_eq!(REGISTRY.categories_matching("cup"), set(&["volume"]));
        assert_eq!(REGISTRY.categories_matching("oz"), set(&["weight"]));
        assert_eq!(REGISTRY.categories_matching("litre"), set(&["volume"]));
        assert_eq!(REGISTRY.categories_matching("kilo"), set(&["weight"]));
    }

    #[test]
    fn test_categories_matching_plural() {
        assert_eq!(REGISTRY.categories_matching("cups"), REGISTRY.categories_matching("cup"));
        assert_eq!(REGISTRY.categories_matching("grams"), set(&["weight"]));
        assert_eq!(REGISTRY.categories_matching("tbsps"), set(&["volume"]));
    }

    #[test]
    fn test_categories_matching_unknown() {
        assert!(REGISTRY.categories_matching("furlong").is_empty());
        assert!(REGISTRY.categories_matching("").is_empty());
    }

    #[test]
    fn test_every_token_resolves_to_its_category() {
        for (_, category) in REGISTRY.iter() {
            for unit in category.units() {
                for token in unit.tokens() {
                    let found = REGISTRY.categories_matching(token);
                    assert!(found.contains(category.name()), "{} -> {:?}", token, found);
                }
            }
        }
    }

    #[test]
    fn test_resolve_unit() {
        let unit = REGISTRY.resolve_unit(1.0, "tbsp", "volume").unwrap();
        assert_eq!(unit.name, "tablespoon");
        assert_eq!(unit.in_base, 15.0);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(REGISTRY.resolve_unit(1.0, "t", "volume").unwrap().name, "teaspoon");
        assert_eq!(REGISTRY.resolve_unit(1.0, "T", "volume").unwrap().name, "tablespoon");
    }

    #[test]
    fn test_resolve_plural_fallback() {
        assert_eq!(REGISTRY.resolve_unit(2.0, "cups", "volume").unwrap().name, "cup");
        assert_eq!(REGISTRY.resolve_unit(2.0, "pounds", "weight").unwrap().name, "pound");
    }

    #[test]
    fn test_resolve_unit_not_found() {
        let err = REGISTRY.resolve_unit(1.0, "oz", "volume").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnitNotFound { token: "oz".to_string(), category: "volume".to_string() }
        );
    }

    #[test]
    fn test_resolve_unknown_category_comes_first() {
        let err = REGISTRY.resolve_unit(f64::NAN, "oz", "length").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownCategory { .. }));
    }

    #[test]
    fn test_resolve_invalid_amount() {
        let err = REGISTRY.resolve_unit(f64::NAN, "oz", "weight").unwrap_err();
        assert_eq!(err.code(), cupful_core::codes::INVALID_AMOUNT);
        assert!(REGISTRY.resolve_unit(f64::INFINITY, "oz", "weight").is_err());
    }

    #[test]
    fn test_resolve_ambiguous_unit() {
        let registry = UnitRegistry::builder()
            .category("volume", "milliliter")
            .unit(Unit::new("milliliter", 1.0, System::Metric).with_symbols(&["mL"]))
            .unit(Unit::new("cup", 237.0, System::Imperial).with_symbols(&["c"]))
            .unit(Unit::new("centiliter", 10.0, System::Metric).with_symbols(&["cl", "c"]))
            .build()
            .unwrap();

        let err = registry.resolve_unit(1.0, "c", "volume").unwrap_err();
        assert_eq!(
            err,
            ConversionError::AmbiguousUnit {
                token: "c".to_string(),
                category: "volume".to_string(),
                candidates: vec!["cup".to_string(), "centiliter".to_string()],
            }
        );
        // Unshared tokens still resolve
        assert_eq!(registry.resolve_unit(1.0, "cl", "volume").unwrap().name, "centiliter");
    }
}
