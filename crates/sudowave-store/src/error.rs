//! Error types for the persisted record.

use std::fmt::{self, Display};

use derive_more::{Display as DeriveDisplay, Error, From};

/// Every rule a record broke, one line per violation.
///
/// The validator runs in stages (shape, keys, field types, value domains)
/// and each stage reports all of its findings at once rather than stopping
/// at the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<String>,
}

impl ValidationReport {
    pub(crate) fn new(violations: Vec<String>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// Returns the individual violations in check order.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Failure to encode or decode a board record.
///
/// [`Ungenerated`](Self::Ungenerated) is caller misuse; the other variants
/// are recoverable by the loader (skip or delete the offending record).
#[derive(Debug, DeriveDisplay, Error, From)]
pub enum StoreError {
    /// An ungenerated board has no meaningful record.
    #[display("cannot serialize a board that has not been generated")]
    Ungenerated,
    /// The record is well-formed JSON but breaks the schema.
    #[display("invalid board record:\n{_0}")]
    Validation(#[error(not(source))] ValidationReport),
    /// The record is not valid JSON at all.
    #[display("unreadable board record: {_0}")]
    Json(serde_json::Error),
}
