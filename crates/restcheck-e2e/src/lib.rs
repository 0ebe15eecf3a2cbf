//! # restcheck-e2e — fixtures for the end-to-end suites
//!
//! Builders for demo-API-shaped JSON bodies. The `tests/` suites mount
//! these on wiremock servers and drive the full
//! client → catalogue → engine path against them.

use serde_json::{json, Value};

/// A complete product item, shaped like the demo dataset.
pub fn product(id: u64) -> Value {
    json!({
        "id": id,
        "title": "Essence Mascara Lash Princess",
        "description": "A popular mascara known for its volumizing effects.",
        "price": 9.99,
        "discountPercentage": 7.17,
        "rating": 4.94,
        "stock": 5,
        "brand": "Essence",
        "category": "beauty",
        "thumbnail": "https://cdn.dummyjson.com/products/images/1/thumbnail.png",
        "images": ["https://cdn.dummyjson.com/products/images/1/1.png"]
    })
}

/// A complete user item, shaped like the demo dataset.
pub fn user(id: u64) -> Value {
    json!({
        "id": id,
        "firstName": "Emily",
        "lastName": "Johnson",
        "email": "emily.johnson@x.dummyjson.com",
        "username": "emilys",
        "gender": "female",
        "age": 28,
        "phone": "+81 965-431-3024"
    })
}

/// A complete todo item, shaped like the demo dataset.
pub fn todo(id: u64) -> Value {
    json!({
        "id": id,
        "todo": "Do something nice for someone you care about",
        "completed": false,
        "userId": 152
    })
}

/// A collection envelope with pagination metadata.
pub fn envelope(key: &str, items: Vec<Value>, total: u64, skip: u64, limit: u64) -> Value {
    json!({
        key: items,
        "total": total,
        "skip": skip,
        "limit": limit
    })
}

/// The not-found error body the demo API returns.
pub fn not_found(singular: &str, id: u64) -> Value {
    json!({"message": format!("{singular} with id '{id}' not found")})
}

/// A soft-delete echo: the item plus `isDeleted`/`deletedOn`.
pub fn deleted(mut item: Value) -> Value {
    if let Some(map) = item.as_object_mut() {
        map.insert("isDeleted".into(), json!(true));
        map.insert("deletedOn".into(), json!("2026-08-07T10:00:00.000Z"));
    }
    item
}
