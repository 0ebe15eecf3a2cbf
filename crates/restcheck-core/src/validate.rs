//! The validation pass.
//!
//! One synchronous, stateless walk over the response: status first, then
//! body shape, then per-field checks. Violations accumulate so a single
//! call reports every independent defect; only defects that make further
//! inspection impossible (unparseable body, missing collection property)
//! stop the walk early.

use serde_json::{Map, Value};

use crate::contract::{BodyShape, FieldSpec, FieldType, ResponseContract};
use crate::violation::{ValidationReport, Violation, ViolationKind};

impl ResponseContract {
    /// Validate a parsed JSON body and its HTTP status against this contract.
    ///
    /// Pure function: no I/O, no shared state. Repeated validation of the
    /// same input yields a structurally equal report.
    pub fn validate(&self, actual_status: u16, body: &Value) -> ValidationReport {
        let mut violations = Vec::new();

        if actual_status != self.expected_status() {
            violations.push(Violation {
                field: None,
                kind: ViolationKind::StatusMismatch,
                message: format!(
                    "status mismatch: expected {} got {}",
                    self.expected_status(),
                    actual_status
                ),
            });
        }

        match self.shape() {
            BodyShape::Single => self.check_item(body, None, &mut violations),
            BodyShape::Collection { key, expected_len } => {
                let Some(envelope) = body.as_object() else {
                    violations.push(Violation {
                        field: None,
                        kind: ViolationKind::MalformedBody,
                        message: format!(
                            "expected a JSON object envelope, got {}",
                            FieldType::name_of(body)
                        ),
                    });
                    return ValidationReport::new(violations);
                };

                match envelope.get(key.as_str()) {
                    Some(Value::Array(items)) => {
                        if let Some(expected) = expected_len {
                            if items.len() != *expected {
                                violations.push(Violation {
                                    field: Some(key.clone()),
                                    kind: ViolationKind::WrongLength,
                                    message: format!(
                                        "collection has {} items, expected {}",
                                        items.len(),
                                        expected
                                    ),
                                });
                            }
                        }
                        if items.is_empty() {
                            violations.push(Violation {
                                field: Some(key.clone()),
                                kind: ViolationKind::EmptyCollection,
                                message: "collection is empty".to_string(),
                            });
                        } else {
                            for (idx, item) in items.iter().enumerate() {
                                let element_path = format!("{key}[{idx}]");
                                self.check_item(item, Some(element_path.as_str()), &mut violations);
                            }
                        }
                        check_fields(self.meta_fields(), envelope, None, &mut violations);
                    }
                    Some(other) => {
                        // Cannot check elements; stop here.
                        violations.push(Violation {
                            field: Some(key.clone()),
                            kind: ViolationKind::MissingCollection,
                            message: format!(
                                "expected an array, got {}",
                                FieldType::name_of(other)
                            ),
                        });
                    }
                    None => {
                        violations.push(Violation {
                            field: Some(key.clone()),
                            kind: ViolationKind::MissingCollection,
                            message: "property is missing".to_string(),
                        });
                    }
                }
            }
        }

        ValidationReport::new(violations)
    }

    /// Validate a raw response body, parsing it as JSON first.
    ///
    /// An unparseable body yields a single `MalformedBody` violation and
    /// short-circuits every body check; the status check still applies.
    pub fn validate_text(&self, actual_status: u16, raw: &str) -> ValidationReport {
        match serde_json::from_str::<Value>(raw) {
            Ok(body) => self.validate(actual_status, &body),
            Err(_) => {
                let mut violations = Vec::new();
                if actual_status != self.expected_status() {
                    violations.push(Violation {
                        field: None,
                        kind: ViolationKind::StatusMismatch,
                        message: format!(
                            "status mismatch: expected {} got {}",
                            self.expected_status(),
                            actual_status
                        ),
                    });
                }
                violations.push(Violation {
                    field: None,
                    kind: ViolationKind::MalformedBody,
                    message: "body not parseable".to_string(),
                });
                ValidationReport::new(violations)
            }
        }
    }

    /// Apply the field specs, forbidden list, and unknown-field policy to
    /// one item. `path_prefix` carries the element path for collection
    /// items (`products[3]`).
    fn check_item(&self, item: &Value, path_prefix: Option<&str>, violations: &mut Vec<Violation>) {
        let Some(map) = item.as_object() else {
            violations.push(Violation {
                field: path_prefix.map(str::to_string),
                kind: ViolationKind::MalformedBody,
                message: format!("expected a JSON object, got {}", FieldType::name_of(item)),
            });
            return;
        };

        check_fields(self.fields(), map, path_prefix, violations);

        for name in self.forbidden() {
            if map.contains_key(name.as_str()) {
                violations.push(Violation {
                    field: Some(join_path(path_prefix, name)),
                    kind: ViolationKind::UnexpectedField,
                    message: "forbidden field is present".to_string(),
                });
            }
        }

        if self.denies_unknown() {
            for key in map.keys() {
                let named = self.fields().iter().any(|spec| spec.name() == key)
                    || self.forbidden().iter().any(|f| f == key);
                if !named {
                    violations.push(Violation {
                        field: Some(join_path(path_prefix, key)),
                        kind: ViolationKind::UnexpectedField,
                        message: "field is not named by the contract".to_string(),
                    });
                }
            }
        }
    }
}

/// Check one spec list against one JSON object, in declared order.
fn check_fields(
    specs: &[FieldSpec],
    map: &Map<String, Value>,
    path_prefix: Option<&str>,
    violations: &mut Vec<Violation>,
) {
    for spec in specs {
        let path = join_path(path_prefix, spec.name());
        match map.get(spec.name()) {
            None => {
                if spec.is_required() {
                    violations.push(Violation {
                        field: Some(path),
                        kind: ViolationKind::MissingField,
                        message: "required field is missing".to_string(),
                    });
                }
            }
            Some(value) => {
                if !spec.field_type().matches(value) {
                    violations.push(Violation {
                        field: Some(path),
                        kind: ViolationKind::TypeMismatch,
                        message: format!(
                            "expected {}, got {} ({})",
                            spec.field_type(),
                            FieldType::name_of(value),
                            value
                        ),
                    });
                } else if let Some(predicate) = spec.predicate() {
                    if !predicate.holds(value) {
                        violations.push(Violation {
                            field: Some(path),
                            kind: ViolationKind::PredicateFailure,
                            message: format!("value {value} fails constraint {predicate}"),
                        });
                    }
                }
            }
        }
    }
}

fn join_path(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}.{name}"),
        None => name.to_string(),
    }
}
