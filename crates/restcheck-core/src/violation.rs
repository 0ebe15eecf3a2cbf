//! Violations and the validation report.
//!
//! A [`Violation`] is one detected deviation between the actual response
//! and its contract. A [`ValidationReport`] is the immutable, ordered
//! collection of them produced by one validation pass; its `Display`
//! rendering is the reporting hook test runners print on failure.

use std::fmt;

use serde::Serialize;

/// Classification of a single contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Actual HTTP status differs from the expected one.
    StatusMismatch,
    /// Body is not parseable JSON, or not the JSON shape checks need.
    MalformedBody,
    /// The collection property is absent or not an array.
    MissingCollection,
    /// The collection property is an empty array.
    EmptyCollection,
    /// The collection length differs from the pinned expected length.
    WrongLength,
    /// A required field is absent.
    MissingField,
    /// A field is present with the wrong runtime type.
    TypeMismatch,
    /// A field is present and well-typed but fails its value constraint.
    PredicateFailure,
    /// A field is present that the contract forbids (or, under
    /// `deny_unknown`, does not name).
    UnexpectedField,
}

/// A single detected deviation between actual and expected response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Path of the offending field (`email`, `products[3].rating`,
    /// `limit`), or `None` for response-level violations such as a
    /// status mismatch.
    pub field: Option<String>,
    pub kind: ViolationKind,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "  {}: {}", field, self.message),
            None => write!(f, "  (response): {}", self.message),
        }
    }
}

/// Outcome of validating one response against one contract.
///
/// Immutable once produced. An empty violation list is a pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// True when no violations were found.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations, in detection order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return f.write_str("  ok");
        }
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
