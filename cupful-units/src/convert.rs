//! Conversion engine - express an amount in every unit of its category

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::trace;
use cupful_core::{ConversionError, Result, System};
use crate::registry::CategoryId;
use crate::unit::display_label;
use crate::{Unit, UnitRegistry};

/// An amount expressed in one unit
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ConversionResult {
    /// Canonical unit name; serialized as the key of `AllUnits`
    #[serde(skip)]
    pub name: String,
    pub amount: f64,
    pub symbols: Vec<String>,
    pub names: Vec<String>,
    pub system: System,
}

impl ConversionResult {
    fn new(unit: &Unit, amount: f64) -> Self {
        ConversionResult {
            name: unit.name.clone(),
            amount,
            symbols: unit.symbols.clone(),
            names: unit.names.clone(),
            system: unit.system,
        }
    }

    /// First symbol when requested and present, otherwise the canonical name
    pub fn label(&self, use_symbol: bool) -> &str {
        display_label(&self.name, &self.symbols, use_symbol)
    }
}

/// One result per unit of a category, in definition order
#[derive(Debug, Clone, PartialEq)]
pub struct AllUnits {
    category: String,
    results: Vec<ConversionResult>,
}

impl AllUnits {
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Result for a canonical unit name
    pub fn get(&self, name: &str) -> Option<&ConversionResult> {
        self.results.iter().find(|r| r.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversionResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<'a> IntoIterator for &'a AllUnits {
    type Item = &'a ConversionResult;
    type IntoIter = std::slice::Iter<'a, ConversionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl IntoIterator for AllUnits {
    type Item = ConversionResult;
    type IntoIter = std::vec::IntoIter<ConversionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Serialized as an object keyed by canonical unit name
impl Serialize for AllUnits {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for result in &self.results {
            map.serialize_entry(&result.name, result)?;
        }
        map.end()
    }
}

impl UnitRegistry {
    /// Convert an amount given in `token` into every unit of `category`.
    ///
    /// No rounding happens here; the originating unit's entry equals
    /// `amount` up to floating-point error. An amount that overflows to
    /// infinity in any unit fails with `InvalidAmount`.
    pub fn convert_to_all_units(&self, amount: f64, token: &str, category: &str) -> Result<AllUnits> {
        let id = self.category_id(category)?;
        self.convert_in(id, amount, token)
    }

    pub(crate) fn convert_in(&self, id: CategoryId, amount: f64, token: &str) -> Result<AllUnits> {
        let category = self.category_ref(id)?;
        let source = self.resolve_in(id, amount, token)?;
        let amount_in_base = source.to_base(amount);

        let results = category
            .units()
            .iter()
            .map(|unit| {
                let converted = unit.from_base(amount_in_base);
                trace!(from = %source.name, to = %unit.name, amount, converted, "converted");
                if !converted.is_finite() {
                    return Err(ConversionError::InvalidAmount { amount });
                }
                Ok(ConversionResult::new(unit, converted))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(AllUnits {
            category: category.name().to_string(),
            results,
        })
    }
}
