//! Cupful Core - Fundamental types
//!
//! This crate provides the core types shared by the Cupful engine:
//! - `System`: Measurement system tag (metric, imperial)
//! - `Fraction`: Reduced fractions for display
//! - `ConversionError`: Structured errors with codes and suggestions

mod error;
mod fraction;
mod system;

pub use error::{ConversionError, ErrorReport, codes, human_list};
pub use fraction::{Fraction, check_digits, DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS};
pub use system::System;

/// Result alias used across Cupful
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConversionError, Fraction, System, Result};
    pub use crate::error::codes;
}
