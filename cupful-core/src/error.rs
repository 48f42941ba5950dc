//! Structured conversion errors
//!
//! Every failure is a distinct variant carrying the offending token, category
//! and candidates. Errors never leave the registry in a bad state; they only
//! end the call that raised them.

use crate::System;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNIT_NOT_FOUND: &str = "UNIT_NOT_FOUND";
    pub const AMBIGUOUS_UNIT: &str = "AMBIGUOUS_UNIT";
    pub const INVALID_AMOUNT: &str = "INVALID_AMOUNT";
    pub const AMOUNT_TOO_SMALL: &str = "AMOUNT_TOO_SMALL";
    pub const NO_CATEGORY_MATCH: &str = "NO_CATEGORY_MATCH";
    pub const AMBIGUOUS_CATEGORY: &str = "AMBIGUOUS_CATEGORY";
    pub const NO_UNITS_IN_SYSTEM: &str = "NO_UNITS_IN_SYSTEM";
    pub const UNKNOWN_SYSTEM: &str = "UNKNOWN_SYSTEM";
    pub const INVALID_PRECISION: &str = "INVALID_PRECISION";
    pub const INVALID_REGISTRY: &str = "INVALID_REGISTRY";
}

/// Errors raised while resolving, converting or selecting units
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("`{category}` is not a valid category of units; choose between {}", human_list(.known))]
    UnknownCategory { category: String, known: Vec<String> },

    #[error("no unit named `{token}` in category `{category}`")]
    UnitNotFound { token: String, category: String },

    #[error("too many units named `{token}` in category `{category}`: {}", .candidates.join(", "))]
    AmbiguousUnit {
        token: String,
        category: String,
        candidates: Vec<String>,
    },

    #[error("amount must be a finite number, got {amount}")]
    InvalidAmount { amount: f64 },

    #[error("amount {amount} rounds to zero in every unit even at {digits} fraction digits")]
    AmountTooSmall { amount: f64, digits: u32 },

    #[error("no category has a unit named `{token}`")]
    NoCategoryMatch { token: String },

    #[error("more than one category has a unit named `{token}`: {}", human_list(.candidates))]
    AmbiguousCategory { token: String, candidates: Vec<String> },

    #[error("category `{category}` has no {system} units")]
    NoUnitsInSystem { category: String, system: System },

    #[error("unknown measurement system `{0}`")]
    UnknownSystem(String),

    #[error("fraction precision must be between 1 and {max} digits, got {digits}")]
    InvalidPrecision { digits: u32, max: u32 },

    #[error("invalid registry data in `{category}`: {reason}")]
    InvalidRegistry { category: String, reason: String },
}

/// Serializable view of an error for hosts that report failures as data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ConversionError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCategory { .. } => codes::UNKNOWN_CATEGORY,
            Self::UnitNotFound { .. } => codes::UNIT_NOT_FOUND,
            Self::AmbiguousUnit { .. } => codes::AMBIGUOUS_UNIT,
            Self::InvalidAmount { .. } => codes::INVALID_AMOUNT,
            Self::AmountTooSmall { .. } => codes::AMOUNT_TOO_SMALL,
            Self::NoCategoryMatch { .. } => codes::NO_CATEGORY_MATCH,
            Self::AmbiguousCategory { .. } => codes::AMBIGUOUS_CATEGORY,
            Self::NoUnitsInSystem { .. } => codes::NO_UNITS_IN_SYSTEM,
            Self::UnknownSystem(_) => codes::UNKNOWN_SYSTEM,
            Self::InvalidPrecision { .. } => codes::INVALID_PRECISION,
            Self::InvalidRegistry { .. } => codes::INVALID_REGISTRY,
        }
    }

    /// Suggestion for fixing the error, when one is known
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnknownCategory { known, .. } => {
                Some(format!("Use one of: {}", known.join(", ")))
            }
            Self::UnitNotFound { category, .. } => {
                Some(format!("Check the unit spelling or list the units of `{}`", category))
            }
            Self::AmbiguousCategory { candidates, .. } => {
                Some(format!("Pass the category explicitly ({})", candidates.join(" or ")))
            }
            Self::NoUnitsInSystem { .. } => Some("Request a different system".to_string()),
            Self::AmountTooSmall { .. } => {
                Some("Use a smaller unit or convert without selecting one".to_string())
            }
            Self::UnknownSystem(_) => Some("Use \"metric\" or \"imperial\"".to_string()),
            Self::AmbiguousUnit { .. } | Self::InvalidRegistry { .. } => {
                Some("The unit table is inconsistent; this is a data bug".to_string())
            }
            _ => None,
        }
    }

    /// Build the serializable report for this error
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion(),
        }
    }
}

/// Join items as an English list: "a", "a and b", "a, b, and c"
pub fn human_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [rest @ .., last] => {
            let head: Vec<&str> = rest.iter().map(|s| s.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_list() {
        let empty: [&str; 0] = [];
        assert_eq!(human_list(&empty), "");
        assert_eq!(human_list(&["volume"]), "volume");
        assert_eq!(human_list(&["volume", "weight"]), "volume and weight");
        assert_eq!(human_list(&["a", "b", "c"]), "a, b, and c");
    }

    #[test]
    fn test_unknown_category_message() {
        let err = ConversionError::UnknownCategory {
            category: "length".to_string(),
            known: vec!["volume".to_string(), "weight".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "`length` is not a valid category of units; choose between volume and weight"
        );
        assert_eq!(err.code(), codes::UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_no_units_in_system_message() {
        let err = ConversionError::NoUnitsInSystem {
            category: "weight".to_string(),
            system: System::Imperial,
        };
        assert_eq!(err.to_string(), "category `weight` has no imperial units");
    }

    #[test]
    fn test_amount_too_small_message() {
        let err = ConversionError::AmountTooSmall { amount: 1e-20, digits: 15 };
        assert_eq!(
            err.to_string(),
            "amount 0.00000000000000000001 rounds to zero in every unit even at 15 fraction digits"
        );
        assert_eq!(err.code(), codes::AMOUNT_TOO_SMALL);
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_report_serialization() {
        let err = ConversionError::AmbiguousCategory {
            token: "g".to_string(),
            candidates: vec!["volume".to_string(), "weight".to_string()],
        };
        let json = serde_json::to_value(err.report()).unwrap();
        assert_eq!(json["code"], "AMBIGUOUS_CATEGORY");
        assert_eq!(json["suggestion"], "Pass the category explicitly (volume or weight)");

        let err = ConversionError::InvalidAmount { amount: f64::NAN };
        let json = serde_json::to_value(err.report()).unwrap();
        assert!(json.get("suggestion").is_none());
    }
}
