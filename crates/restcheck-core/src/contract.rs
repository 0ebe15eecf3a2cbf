//! Contract types: expected field declarations and response shape.
//!
//! A [`ResponseContract`] bundles everything a caller expects of one HTTP
//! response: the status code, whether the body is a single item or a keyed
//! collection, and the per-field specs. Contracts are plain data — built
//! once, cloned freely, and consumed by [`crate::validate`].

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Error raised for contract construction misuse.
///
/// Shape deviations in a validated response are never errors (they become
/// [`crate::Violation`]s); this type only covers contracts that are
/// malformed by construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// The same field name appears twice in one spec list.
    #[error("duplicate field '{0}' in contract")]
    DuplicateField(String),
}

/// The closed set of expected runtime types for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    String,
    Boolean,
    Array,
    Object,
}

impl FieldType {
    /// Whether `value`'s runtime JSON type matches this expected type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::Number => value.is_number(),
            FieldType::String => value.is_string(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Array => value.is_array(),
            FieldType::Object => value.is_object(),
        }
    }

    /// The runtime type name of an arbitrary JSON value, for messages.
    pub fn name_of(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Number => "number",
            FieldType::String => "string",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
        };
        f.write_str(name)
    }
}

/// A value constraint applied to a field that is present and well-typed.
///
/// The set is closed: every constraint the demo API suites need is one of
/// these variants, which keeps contracts `Clone + Send + Sync` and lets
/// failure messages render the constraint itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Numeric value must be strictly greater than the bound.
    GreaterThan(f64),
    /// String value must contain the given substring.
    Contains(String),
    /// Value must equal the given JSON value exactly.
    Equals(Value),
    /// String, array, or object must be non-empty.
    NonEmpty,
}

impl Predicate {
    /// Evaluate the constraint against a JSON value.
    ///
    /// A value of the wrong runtime type fails the constraint; the type
    /// check that normally precedes this is a separate violation.
    pub fn holds(&self, value: &Value) -> bool {
        match self {
            Predicate::GreaterThan(bound) => {
                value.as_f64().map(|n| n > *bound).unwrap_or(false)
            }
            Predicate::Contains(needle) => {
                value.as_str().map(|s| s.contains(needle.as_str())).unwrap_or(false)
            }
            Predicate::Equals(expected) => value == expected,
            Predicate::NonEmpty => match value {
                Value::String(s) => !s.is_empty(),
                Value::Array(items) => !items.is_empty(),
                Value::Object(map) => !map.is_empty(),
                _ => false,
            },
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::GreaterThan(bound) => write!(f, "> {bound}"),
            Predicate::Contains(needle) => write!(f, "contains {needle:?}"),
            Predicate::Equals(expected) => write!(f, "equals {expected}"),
            Predicate::NonEmpty => f.write_str("non-empty"),
        }
    }
}

/// Declarative description of one expected field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    name: String,
    field_type: FieldType,
    required: bool,
    predicate: Option<Predicate>,
}

impl FieldSpec {
    fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            required: true,
            predicate: None,
        }
    }

    /// A required numeric field.
    pub fn number(name: &str) -> Self {
        Self::new(name, FieldType::Number)
    }

    /// A required string field.
    pub fn string(name: &str) -> Self {
        Self::new(name, FieldType::String)
    }

    /// A required boolean field.
    pub fn boolean(name: &str) -> Self {
        Self::new(name, FieldType::Boolean)
    }

    /// A required array field.
    pub fn array(name: &str) -> Self {
        Self::new(name, FieldType::Array)
    }

    /// A required object field.
    pub fn object(name: &str) -> Self {
        Self::new(name, FieldType::Object)
    }

    /// Mark the field optional: absence is fine, but a present value must
    /// still match the declared type and constraint.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Attach a value constraint.
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }
}

/// Whether the response body is one item or a keyed collection envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BodyShape {
    /// The body itself is the item under test.
    Single,
    /// The body wraps an array of items under `key`, alongside pagination
    /// metadata (`total`, `skip`, `limit` on the demo API).
    Collection {
        key: String,
        /// Exact expected item count, when the request pinned one
        /// (e.g. `?limit=5`). `None` means any non-zero count.
        expected_len: Option<usize>,
    },
}

/// Everything one HTTP response is expected to satisfy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseContract {
    expected_status: u16,
    shape: BodyShape,
    fields: Vec<FieldSpec>,
    /// Specs applied to the collection envelope itself (pagination
    /// metadata). Ignored for `BodyShape::Single`.
    meta_fields: Vec<FieldSpec>,
    /// Field names that must NOT appear on an item.
    forbidden: Vec<String>,
    /// When set, any item property not named by a spec is a violation.
    /// Off by default: the remote API is free to return more than the
    /// contract names, and the contract makes no assumption either way.
    deny_unknown: bool,
}

impl ResponseContract {
    /// Contract for a single-item body.
    pub fn single(expected_status: u16, fields: Vec<FieldSpec>) -> Result<Self, ContractError> {
        reject_duplicates(&fields)?;
        Ok(Self {
            expected_status,
            shape: BodyShape::Single,
            fields,
            meta_fields: Vec::new(),
            forbidden: Vec::new(),
            deny_unknown: false,
        })
    }

    /// Contract for a collection body wrapping items under `key`.
    pub fn collection(
        expected_status: u16,
        key: &str,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, ContractError> {
        reject_duplicates(&fields)?;
        Ok(Self {
            expected_status,
            shape: BodyShape::Collection {
                key: key.to_string(),
                expected_len: None,
            },
            fields,
            meta_fields: Vec::new(),
            forbidden: Vec::new(),
            deny_unknown: false,
        })
    }

    /// Pin the exact collection length. No effect on single-item contracts.
    pub fn with_expected_len(mut self, len: usize) -> Self {
        if let BodyShape::Collection { expected_len, .. } = &mut self.shape {
            *expected_len = Some(len);
        }
        self
    }

    /// Attach specs for the collection envelope (pagination metadata).
    pub fn with_meta_fields(mut self, meta_fields: Vec<FieldSpec>) -> Result<Self, ContractError> {
        reject_duplicates(&meta_fields)?;
        self.meta_fields = meta_fields;
        Ok(self)
    }

    /// Require that `name` is absent from each item.
    pub fn forbid(mut self, name: &str) -> Self {
        self.forbidden.push(name.to_string());
        self
    }

    /// Reject any item property not named by a field spec.
    pub fn deny_unknown(mut self) -> Self {
        self.deny_unknown = true;
        self
    }

    pub fn expected_status(&self) -> u16 {
        self.expected_status
    }

    pub fn shape(&self) -> &BodyShape {
        &self.shape
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn meta_fields(&self) -> &[FieldSpec] {
        &self.meta_fields
    }

    pub fn forbidden(&self) -> &[String] {
        &self.forbidden
    }

    pub fn denies_unknown(&self) -> bool {
        self.deny_unknown
    }
}

/// Field names must be unique within one spec list.
fn reject_duplicates(fields: &[FieldSpec]) -> Result<(), ContractError> {
    for (i, spec) in fields.iter().enumerate() {
        if fields[..i].iter().any(|earlier| earlier.name() == spec.name()) {
            return Err(ContractError::DuplicateField(spec.name().to_string()));
        }
    }
    Ok(())
}
