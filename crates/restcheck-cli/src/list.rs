//! # List Subcommand
//!
//! Prints the scenario catalogue without touching the network.

use anyhow::Result;
use clap::Args;

use crate::resolve_scenarios;

/// Arguments for the `restcheck list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Restrict the listing to one resource (products, users, or todos).
    #[arg(long)]
    pub resource: Option<String>,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs) -> Result<u8> {
    let scenarios = resolve_scenarios(args.resource.as_deref())?;

    for scenario in &scenarios {
        println!(
            "{:<32} {:<24} expect {}",
            scenario.name,
            scenario.call.to_string(),
            scenario.contract.expected_status()
        );
    }
    println!("\n{} scenario(s)", scenarios.len());

    Ok(0)
}
