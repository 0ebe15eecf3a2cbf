//! # restcheck-contracts — contract tables for the demo REST API
//!
//! The ad hoc per-test assertions of a browser-runner suite, folded into
//! declarative data: one field table per resource (products, users, todos)
//! and one scenario catalogue pairing each API call with the
//! [`restcheck_core::ResponseContract`] its response must satisfy.
//!
//! Nothing here performs I/O. The catalogue is plain data consumed by
//! `restcheck-client` (to issue the calls) and the CLI (to report results).

pub mod catalogue;
pub mod resources;

pub use catalogue::{catalogue_for, full_catalogue, ApiCall, Method, Resource, Scenario};
pub use resources::{not_found_fields, pagination_meta, product_fields, todo_fields, user_fields};
