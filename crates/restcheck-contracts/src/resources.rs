//! Per-resource field tables for the demo API datasets.
//!
//! These tables are the single source of truth for what each resource's
//! items look like; every scenario contract is assembled from them.

use restcheck_core::{FieldSpec, Predicate};

/// Expected fields of one product item.
///
/// `brand` is optional: the live dataset omits it for some products, so a
/// present value must be a string but absence is fine.
pub fn product_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("id"),
        FieldSpec::string("title"),
        FieldSpec::string("description"),
        FieldSpec::number("price"),
        FieldSpec::number("discountPercentage"),
        FieldSpec::number("rating"),
        FieldSpec::number("stock"),
        FieldSpec::string("brand").optional(),
        FieldSpec::string("category"),
        FieldSpec::string("thumbnail"),
        FieldSpec::array("images"),
    ]
}

/// Expected fields of one user item.
pub fn user_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("id"),
        FieldSpec::string("firstName"),
        FieldSpec::string("lastName"),
        FieldSpec::string("email").with(Predicate::Contains("@".into())),
        FieldSpec::string("username"),
        FieldSpec::string("gender"),
        FieldSpec::number("age").with(Predicate::GreaterThan(0.0)),
        FieldSpec::string("phone"),
    ]
}

/// Expected fields of one todo item.
pub fn todo_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("id"),
        FieldSpec::string("todo"),
        FieldSpec::boolean("completed"),
        FieldSpec::number("userId"),
    ]
}

/// Pagination metadata every collection envelope carries.
pub fn pagination_meta() -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("total"),
        FieldSpec::number("skip"),
        FieldSpec::number("limit"),
    ]
}

/// Expected body of a not-found error response, e.g.
/// `{"message": "User with id '9999' not found"}`.
pub fn not_found_fields(singular: &str, id: u64) -> Vec<FieldSpec> {
    vec![FieldSpec::string("message")
        .with(Predicate::Contains(format!("{singular} with id '{id}' not found")))]
}
