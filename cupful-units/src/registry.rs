//! Unit registry - categories of commensurable units
//!
//! A registry is immutable once built. It only answers lookups; token
//! resolution, conversion and selection live in their own modules as
//! further `impl UnitRegistry` blocks.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use serde::Serialize;
use cupful_core::{ConversionError, Result};
use crate::Unit;

/// Handle to a category inside the registry that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(usize);

/// A named group of units sharing one base unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    name: String,
    base: String,
    units: Vec<Unit>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the base unit every factor is relative to
    pub fn base_name(&self) -> &str {
        &self.base
    }

    pub fn base_unit(&self) -> Option<&Unit> {
        self.unit(&self.base)
    }

    /// Units in definition order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Look up a unit by canonical name
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn unit_names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|u| u.name.as_str())
    }
}

/// A token claimed by more than one unit of the same category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub category: String,
    pub token: String,
    pub units: Vec<String>,
}

/// Registry of categories and their units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitRegistry {
    categories: Vec<Category>,
}

impl UnitRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Category names in definition order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Categories with their handles, in definition order
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &Category)> {
        self.categories.iter().enumerate().map(|(i, c)| (CategoryId(i), c))
    }

    /// Look up a category handle without failing
    pub fn find_category(&self, name: &str) -> Option<CategoryId> {
        self.categories.iter().position(|c| c.name == name).map(CategoryId)
    }

    /// Look up a category handle, failing with `UnknownCategory`
    pub fn category_id(&self, name: &str) -> Result<CategoryId> {
        self.find_category(name).ok_or_else(|| ConversionError::UnknownCategory {
            category: name.to_string(),
            known: self.categories().map(str::to_string).collect(),
        })
    }

    /// Category behind a handle; None for handles from another registry
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.0)
    }

    /// Category behind a handle, failing with `UnknownCategory` for foreign handles
    pub(crate) fn category_ref(&self, id: CategoryId) -> Result<&Category> {
        self.category(id).ok_or_else(|| ConversionError::UnknownCategory {
            category: format!("#{}", id.0),
            known: self.categories().map(str::to_string).collect(),
        })
    }

    /// Units of a category by name, in definition order.
    ///
    /// Each `Unit` carries its canonical `name`, so the slice is the
    /// name-keyed view of the category; `unit_of` looks one up directly.
    pub fn units_of(&self, category: &str) -> Result<&[Unit]> {
        let id = self.category_id(category)?;
        Ok(self.categories[id.0].units())
    }

    /// A unit by its canonical name (not an alias or symbol)
    pub fn unit_of(&self, category: &str, name: &str) -> Result<&Unit> {
        let id = self.category_id(category)?;
        self.categories[id.0].unit(name).ok_or_else(|| ConversionError::UnitNotFound {
            token: name.to_string(),
            category: category.to_string(),
        })
    }

    /// Every token claimed by two or more units within one category.
    /// A well-formed registry has none.
    pub fn collisions(&self) -> Vec<Collision> {
        let mut found = Vec::new();
        for category in &self.categories {
            let mut owners: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
            for unit in &category.units {
                let distinct: BTreeSet<&str> = unit.tokens().collect();
                for token in distinct {
                    owners.entry(token).or_default().push(&unit.name);
                }
            }
            for (token, units) in owners {
                if units.len() > 1 {
                    found.push(Collision {
                        category: category.name.clone(),
                        token: token.to_string(),
                        units: units.into_iter().map(str::to_string).collect(),
                    });
                }
            }
        }
        found
    }
}

/// Builder for a registry; validates structure on `build`
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    categories: Vec<Category>,
    orphans: Vec<String>,
}

impl RegistryBuilder {
    /// Start a category; following `unit` calls add to it
    pub fn category(mut self, name: &str, base: &str) -> Self {
        self.categories.push(Category {
            name: name.to_string(),
            base: base.to_string(),
            units: Vec::new(),
        });
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        match self.categories.last_mut() {
            Some(category) => category.units.push(unit),
            None => self.orphans.push(unit.name),
        }
        self
    }

    pub fn build(self) -> Result<UnitRegistry> {
        if let Some(orphan) = self.orphans.first() {
            return Err(invalid("", format!("unit `{}` declared before any category", orphan)));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.name.as_str()) {
                return Err(invalid(&category.name, "category defined twice"));
            }
            validate_category(category)?;
        }

        Ok(UnitRegistry { categories: self.categories })
    }
}

fn validate_category(category: &Category) -> Result<()> {
    if category.units.is_empty() {
        return Err(invalid(&category.name, "category has no units"));
    }

    let mut names = HashSet::new();
    for unit in &category.units {
        if !names.insert(unit.name.as_str()) {
            return Err(invalid(&category.name, format!("unit `{}` defined twice", unit.name)));
        }
        if !unit.in_base.is_finite() || unit.in_base <= 0.0 {
            return Err(invalid(
                &category.name,
                format!("unit `{}` has non-positive factor {}", unit.name, unit.in_base),
            ));
        }
    }

    match category.base_unit() {
        None => Err(invalid(&category.name, format!("base unit `{}` is not defined", category.base))),
        Some(base) if !base.is_base() => Err(invalid(
            &category.name,
            format!("base unit `{}` must have factor 1, got {}", base.name, base.in_base),
        )),
        Some(_) => Ok(()),
    }
}

fn invalid(category: &str, reason: impl Into<String>) -> ConversionError {
    ConversionError::InvalidRegistry {
        category: category.to_string(),
        reason: reason.into(),
    }
}
