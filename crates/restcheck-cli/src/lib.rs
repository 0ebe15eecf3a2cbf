//! # restcheck-cli — CLI for the demo API contract suite
//!
//! Provides the `restcheck` command-line interface.
//!
//! ## Subcommands
//!
//! - `restcheck check` — run the scenario catalogue against the API and
//!   report violations.
//! - `restcheck list` — print the catalogue without issuing any requests.
//!
//! ```bash
//! restcheck check
//! restcheck check --resource users
//! restcheck check --base-url http://127.0.0.1:3000
//! restcheck list
//! ```

pub mod check;
pub mod list;

use anyhow::Result;
use restcheck_contracts::{catalogue_for, full_catalogue, Resource, Scenario};

/// Resolve the scenario list for an optional resource filter.
pub fn resolve_scenarios(resource: Option<&str>) -> Result<Vec<Scenario>> {
    match resource {
        Some(raw) => {
            let resource: Resource = raw.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            Ok(catalogue_for(resource)?)
        }
        None => Ok(full_catalogue()?),
    }
}
