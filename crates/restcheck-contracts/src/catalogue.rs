//! The scenario catalogue.
//!
//! One [`Scenario`] per exercised operation of the demo API, pairing the
//! HTTP call to issue with the [`ResponseContract`] its response must
//! satisfy. The catalogue mirrors the operations of the original
//! end-to-end suite:
//!
//! | Scenario | Call | Expectation |
//! |----------|------|-------------|
//! | `list` | `GET /{resource}` | 200, non-empty collection + pagination metadata |
//! | `list_limited` | `GET /{resource}?limit=5` | 200, exactly 5 items, `limit == 5` |
//! | `get_by_id` | `GET /{resource}/1` | 200, single item, `id == 1` |
//! | `get_missing` | `GET /{resource}/9999` | 404, `message` names the missing id |
//! | `create` | `POST /{resource}/add` | 201, echoes the submitted fields |
//! | `replace` | `PUT /{resource}/1` | 200, echoes the replacement fields |
//! | `patch` | `PATCH /{resource}/1` | 200, echoes the patched field |
//! | `delete` | `DELETE /{resource}/1` | 200, `isDeleted == true`, `deletedOn` present |
//!
//! Products additionally carry the observed-leniency scenarios
//! (`create_empty`, `replace_unknown_field`) and `delete_missing`: the
//! remote API accepts an empty create payload and silently drops unknown
//! fields on replace, and the catalogue asserts exactly that observed
//! behavior.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};

use restcheck_core::{ContractError, FieldSpec, Predicate, ResponseContract};

use crate::resources::{
    not_found_fields, pagination_meta, product_fields, todo_fields, user_fields,
};

/// The demo API resources under contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Products,
    Users,
    Todos,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Products, Resource::Users, Resource::Todos];

    /// Path segment and collection key (`products`).
    pub fn key(&self) -> &'static str {
        match self {
            Resource::Products => "products",
            Resource::Users => "users",
            Resource::Todos => "todos",
        }
    }

    /// Capitalized singular, as it appears in error messages (`Product`).
    pub fn singular(&self) -> &'static str {
        match self {
            Resource::Products => "Product",
            Resource::Users => "User",
            Resource::Todos => "Todo",
        }
    }

    /// The item field table for this resource.
    pub fn item_fields(&self) -> Vec<FieldSpec> {
        match self {
            Resource::Products => product_fields(),
            Resource::Users => user_fields(),
            Resource::Todos => todo_fields(),
        }
    }

    fn create_payload(&self) -> Value {
        match self {
            Resource::Products => json!({
                "title": "Essence Test Kit",
                "price": 49.99,
                "category": "test-category"
            }),
            Resource::Users => json!({
                "firstName": "Grace",
                "lastName": "Hopper",
                "email": "grace.hopper@x.dummyjson.com",
                "age": 45
            }),
            Resource::Todos => json!({
                "todo": "Write integration tests",
                "completed": false,
                "userId": 5
            }),
        }
    }

    fn replace_payload(&self) -> Value {
        match self {
            Resource::Products => json!({
                "title": "Fully Replaced Title",
                "price": 99.99
            }),
            Resource::Users => json!({
                "firstName": "Updated",
                "lastName": "Person"
            }),
            Resource::Todos => json!({
                "todo": "Rewritten todo",
                "completed": true
            }),
        }
    }

    fn patch_payload(&self) -> Value {
        match self {
            Resource::Products => json!({"stock": 123}),
            Resource::Users => json!({"age": 29}),
            Resource::Todos => json!({"completed": true}),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "products" => Ok(Resource::Products),
            "users" => Ok(Resource::Users),
            "todos" => Ok(Resource::Todos),
            other => Err(format!(
                "unknown resource '{other}' (expected products, users, or todos)"
            )),
        }
    }
}

/// HTTP method of a catalogue call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// One HTTP call to issue: method, path relative to the base URL, and an
/// optional JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: Method,
    pub path: String,
    pub payload: Option<Value>,
}

impl ApiCall {
    fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            payload: None,
        }
    }

    fn with_payload(method: Method, path: impl Into<String>, payload: Value) -> Self {
        Self {
            method,
            path: path.into(),
            payload: Some(payload),
        }
    }
}

impl fmt::Display for ApiCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.method, self.path)
    }
}

/// A named call/contract pair.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub call: ApiCall,
    pub contract: ResponseContract,
}

impl Scenario {
    fn new(resource: Resource, op: &str, call: ApiCall, contract: ResponseContract) -> Self {
        Self {
            name: format!("{}.{op}", resource.key()),
            call,
            contract,
        }
    }
}

/// Replace the `id` spec with one pinned to an exact value.
fn pin_id(fields: Vec<FieldSpec>, id: u64) -> Vec<FieldSpec> {
    fields
        .into_iter()
        .map(|spec| {
            if spec.name() == "id" {
                FieldSpec::number("id").with(Predicate::Equals(json!(id)))
            } else {
                spec
            }
        })
        .collect()
}

/// Derive echo specs from a request payload: each submitted field must
/// come back with the same type and value.
fn echo_fields(payload: &Value) -> Vec<FieldSpec> {
    let Some(map) = payload.as_object() else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(name, value)| {
            let spec = match value {
                Value::Number(_) => FieldSpec::number(name),
                Value::String(_) => FieldSpec::string(name),
                Value::Bool(_) => FieldSpec::boolean(name),
                Value::Array(_) => FieldSpec::array(name),
                Value::Object(_) => FieldSpec::object(name),
                Value::Null => return None,
            };
            Some(spec.with(Predicate::Equals(value.clone())))
        })
        .collect()
}

/// Echo specs plus a leading `id` spec (pinned when `id` is known).
fn id_and_echo(payload: &Value, id: Option<u64>) -> Vec<FieldSpec> {
    let id_spec = match id {
        Some(id) => FieldSpec::number("id").with(Predicate::Equals(json!(id))),
        None => FieldSpec::number("id"),
    };
    let mut fields = vec![id_spec];
    fields.extend(echo_fields(payload));
    fields
}

/// Build the scenario list for one resource.
pub fn catalogue_for(resource: Resource) -> Result<Vec<Scenario>, ContractError> {
    let key = resource.key();
    let mut scenarios = Vec::new();

    scenarios.push(Scenario::new(
        resource,
        "list",
        ApiCall::get(key),
        ResponseContract::collection(200, key, resource.item_fields())?
            .with_meta_fields(pagination_meta())?,
    ));

    scenarios.push(Scenario::new(
        resource,
        "list_limited",
        ApiCall::get(format!("{key}?limit=5")),
        ResponseContract::collection(200, key, resource.item_fields())?
            .with_expected_len(5)
            .with_meta_fields(vec![
                FieldSpec::number("total"),
                FieldSpec::number("skip"),
                FieldSpec::number("limit").with(Predicate::Equals(json!(5))),
            ])?,
    ));

    scenarios.push(Scenario::new(
        resource,
        "get_by_id",
        ApiCall::get(format!("{key}/1")),
        ResponseContract::single(200, pin_id(resource.item_fields(), 1))?,
    ));

    scenarios.push(Scenario::new(
        resource,
        "get_missing",
        ApiCall::get(format!("{key}/9999")),
        ResponseContract::single(404, not_found_fields(resource.singular(), 9999))?,
    ));

    let create_payload = resource.create_payload();
    scenarios.push(Scenario::new(
        resource,
        "create",
        ApiCall::with_payload(Method::Post, format!("{key}/add"), create_payload.clone()),
        ResponseContract::single(201, id_and_echo(&create_payload, None))?,
    ));

    let replace_payload = resource.replace_payload();
    scenarios.push(Scenario::new(
        resource,
        "replace",
        ApiCall::with_payload(Method::Put, format!("{key}/1"), replace_payload.clone()),
        ResponseContract::single(200, id_and_echo(&replace_payload, Some(1)))?,
    ));

    let patch_payload = resource.patch_payload();
    scenarios.push(Scenario::new(
        resource,
        "patch",
        ApiCall::with_payload(Method::Patch, format!("{key}/1"), patch_payload.clone()),
        ResponseContract::single(200, id_and_echo(&patch_payload, Some(1)))?,
    ));

    scenarios.push(Scenario::new(
        resource,
        "delete",
        ApiCall {
            method: Method::Delete,
            path: format!("{key}/1"),
            payload: None,
        },
        ResponseContract::single(
            200,
            vec![
                FieldSpec::number("id").with(Predicate::Equals(json!(1))),
                FieldSpec::boolean("isDeleted").with(Predicate::Equals(json!(true))),
                FieldSpec::string("deletedOn"),
            ],
        )?,
    ));

    if resource == Resource::Products {
        // The remote API accepts an empty create payload and still mints
        // an id. The catalogue asserts the observed behavior rather than
        // what a stricter API would do.
        scenarios.push(Scenario::new(
            resource,
            "create_empty",
            ApiCall::with_payload(Method::Post, format!("{key}/add"), json!({})),
            ResponseContract::single(201, vec![FieldSpec::number("id")])?,
        ));

        // Unknown fields on replace are silently dropped: the echoed item
        // must not contain them.
        scenarios.push(Scenario::new(
            resource,
            "replace_unknown_field",
            ApiCall::with_payload(Method::Put, format!("{key}/1"), json!({"campoInvalido": "teste"})),
            ResponseContract::single(
                200,
                vec![FieldSpec::number("id").with(Predicate::Equals(json!(1)))],
            )?
            .forbid("campoInvalido"),
        ));

        scenarios.push(Scenario::new(
            resource,
            "delete_missing",
            ApiCall {
                method: Method::Delete,
                path: format!("{key}/9999"),
                payload: None,
            },
            ResponseContract::single(404, not_found_fields(resource.singular(), 9999))?,
        ));
    }

    Ok(scenarios)
}

/// The catalogue for every resource, in a stable order.
pub fn full_catalogue() -> Result<Vec<Scenario>, ContractError> {
    let mut scenarios = Vec::new();
    for resource in Resource::ALL {
        scenarios.extend(catalogue_for(resource)?);
    }
    Ok(scenarios)
}
