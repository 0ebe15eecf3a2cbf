//! # restcheck-core — contract validation engine
//!
//! Checks an HTTP response (status code plus JSON body) against a
//! [`ResponseContract`]: a declarative list of expected fields, their
//! runtime types, and optional value constraints. The outcome is a
//! [`ValidationReport`] — an ordered list of [`Violation`]s, empty on a
//! conforming response.
//!
//! ## Key Design Principles
//!
//! 1. **Pure validation.** [`ResponseContract::validate`] performs no I/O
//!    and holds no state. The same input always yields a structurally
//!    equal report, so validations can run concurrently with no
//!    coordination.
//! 2. **Accumulate, don't abort.** Every independent defect in a response
//!    is reported in one pass. Only defects that make further inspection
//!    impossible (unparseable body, missing collection property) cut the
//!    pass short.
//! 3. **Violations are data, not errors.** A non-conforming response is a
//!    normal outcome and never an `Err`. [`ContractError`] is reserved for
//!    caller misuse when constructing a contract.
//! 4. **Closed type set.** Expected field types are an explicit enum
//!    ([`FieldType`]), checked against the JSON value tree — no
//!    reflection, no schema language.
//!
//! ## Crate Policy
//!
//! - No dependencies beyond serde/serde_json/thiserror.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod contract;
pub mod validate;
pub mod violation;

pub use contract::{BodyShape, ContractError, FieldSpec, FieldType, Predicate, ResponseContract};
pub use violation::{ValidationReport, Violation, ViolationKind};
