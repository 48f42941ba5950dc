//! Sensible-unit selection - pick the most readable equivalent for display
//!
//! Whole numbers win; among them the smallest amount. Without any whole
//! number the amounts are rendered as reduced fractions and the shortest
//! non-zero string wins. Ties go to the unit defined first.

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;
use cupful_core::{
    check_digits, ConversionError, Fraction, Result, System, DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS,
};
use crate::convert::ConversionResult;
use crate::registry::CategoryId;
use crate::UnitRegistry;

fn default_fraction_digits() -> u32 {
    DEFAULT_FRACTION_DIGITS
}

/// Options for `select_sensible`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensibleOptions {
    pub amount: f64,
    /// Unit token: name, alias or symbol
    pub unit: String,
    /// Category to convert in; auto-detected when absent or not a match
    #[serde(default)]
    pub category: Option<String>,
    /// Label the result with the unit's symbol instead of its name
    #[serde(default)]
    pub use_symbol: bool,
    /// Only units of this system are candidates
    #[serde(default)]
    pub system: System,
    /// Decimal digits kept when rendering a fraction
    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: u32,
}

impl SensibleOptions {
    pub fn new(amount: f64, unit: &str) -> Self {
        SensibleOptions {
            amount,
            unit: unit.to_string(),
            category: None,
            use_symbol: false,
            system: System::default(),
            fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }

    pub fn in_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_symbol(mut self, use_symbol: bool) -> Self {
        self.use_symbol = use_symbol;
        self
    }

    pub fn in_system(mut self, system: System) -> Self {
        self.system = system;
        self
    }

    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits;
        self
    }
}

/// Amount shown to humans: a whole number or a reduced fraction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DisplayAmount {
    Number(f64),
    Fraction(Fraction),
}

impl DisplayAmount {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DisplayAmount::Number(n) => Some(*n),
            DisplayAmount::Fraction(_) => None,
        }
    }

    pub fn as_fraction(&self) -> Option<&Fraction> {
        match self {
            DisplayAmount::Fraction(f) => Some(f),
            DisplayAmount::Number(_) => None,
        }
    }
}

impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayAmount::Number(n) => write!(f, "{}", n),
            DisplayAmount::Fraction(frac) => write!(f, "{}", frac),
        }
    }
}

/// The selected unit and amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayResult {
    pub amount: DisplayAmount,
    /// Unit name, or its first symbol when requested
    pub unit: String,
    pub system: System,
}

impl fmt::Display for DisplayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

impl UnitRegistry {
    /// Convert an amount and pick the most human-friendly unit for it
    pub fn select_sensible(&self, options: &SensibleOptions) -> Result<DisplayResult> {
        check_digits(options.fraction_digits)?;

        let id = self.settle_category(&options.unit, options.category.as_deref())?;
        let all = self.convert_in(id, options.amount, &options.unit)?;

        let candidates: Vec<ConversionResult> = all
            .into_iter()
            .filter(|r| r.system == options.system)
            .collect();
        if candidates.is_empty() {
            return Err(ConversionError::NoUnitsInSystem {
                category: self.category_ref(id)?.name().to_string(),
                system: options.system,
            });
        }

        // min_by returns the first of equal elements, keeping definition order
        let whole = candidates
            .iter()
            .filter(|r| r.amount.trunc() == r.amount)
            .min_by(|a, b| a.amount.total_cmp(&b.amount));

        if let Some(best) = whole {
            debug!(unit = %best.name, amount = best.amount, "selected whole amount");
            return Ok(DisplayResult {
                amount: DisplayAmount::Number(best.amount),
                unit: best.label(options.use_symbol).to_string(),
                system: best.system,
            });
        }

        // A fraction that rounds to zero hides a non-zero amount; widen the
        // precision until some unit shows a non-zero fraction
        let mut digits = options.fraction_digits;
        loop {
            let rendered = candidates
                .iter()
                .map(|r| Fraction::from_f64(r.amount, digits).map(|f| (r, f)))
                .collect::<Result<Vec<_>>>()?;

            // min_by_key returns the first of equal keys, keeping definition order
            let shortest = rendered
                .into_iter()
                .filter(|(_, f)| !f.is_zero())
                .min_by_key(|(_, f)| f.to_string().len());

            if let Some((best, fraction)) = shortest {
                debug!(unit = %best.name, fraction = %fraction, digits, "selected shortest fraction");
                return Ok(DisplayResult {
                    amount: DisplayAmount::Fraction(fraction),
                    unit: best.label(options.use_symbol).to_string(),
                    system: best.system,
                });
            }
            if digits >= MAX_FRACTION_DIGITS {
                return Err(ConversionError::AmountTooSmall { amount: options.amount, digits });
            }
            digits += 1;
        }
    }

    /// Use the requested category when the token belongs to it, otherwise
    /// fall back to the single category the token matches
    fn settle_category(&self, token: &str, requested: Option<&str>) -> Result<CategoryId> {
        let possible = self.categories_matching(token);

        if let Some(name) = requested.filter(|c| !c.is_empty()) {
            if let Some(id) = self.find_category(name) {
                if possible.contains(name) {
                    return Ok(id);
                }
            }
            debug!(token, requested = name, "requested category does not match, detecting");
        }

        let mut found = possible.into_iter();
        match (found.next(), found.next()) {
            (None, _) => Err(ConversionError::NoCategoryMatch { token: token.to_string() }),
            (Some(only), None) => self.category_id(only),
            (Some(first), Some(second)) => {
                let mut candidates = vec![first.to_string(), second.to_string()];
                candidates.extend(found.map(str::to_string));
                Err(ConversionError::AmbiguousCategory {
                    token: token.to_string(),
                    candidates,
                })
            }
        }
    }
}
