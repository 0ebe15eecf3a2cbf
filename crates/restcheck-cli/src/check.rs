//! # Check Subcommand
//!
//! Runs the scenario catalogue against the API and prints one PASS/FAIL
//! line per scenario, with rendered violations under each failure.
//!
//! Contract violations are an expected outcome (exit code 1); only
//! transport and configuration failures are operational errors (exit
//! code 2, surfaced as `Err`).

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use restcheck_client::{DemoApiConfig, DemoClient};

use crate::resolve_scenarios;

/// Arguments for the `restcheck check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Restrict the run to one resource (products, users, or todos).
    #[arg(long)]
    pub resource: Option<String>,

    /// Base URL of the API under test. Overrides `RESTCHECK_BASE_URL`.
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every scenario passed, 1 when any contract
/// was violated.
pub async fn run_check(args: &CheckArgs) -> Result<u8> {
    let scenarios = resolve_scenarios(args.resource.as_deref())?;

    let mut config = DemoApiConfig::from_env().context("failed to load configuration")?;
    if let Some(raw) = &args.base_url {
        config.base_url = Url::parse(raw).with_context(|| format!("invalid base URL '{raw}'"))?;
    }

    tracing::info!(base_url = %config.base_url, scenarios = scenarios.len(), "starting check run");

    let client = DemoClient::new(config).context("failed to build HTTP client")?;

    let total = scenarios.len();
    let mut passed = 0usize;

    for scenario in &scenarios {
        let resp = client
            .execute(&scenario.call)
            .await
            .with_context(|| format!("scenario {} could not reach the API", scenario.name))?;

        let report = resp.validate_against(&scenario.contract);
        if report.passed() {
            passed += 1;
            println!("PASS  {}  ({})", scenario.name, scenario.call);
        } else {
            println!("FAIL  {}  ({})", scenario.name, scenario.call);
            println!("{report}");
        }
    }

    println!("\nScenarios: {passed}/{total} passed");

    if passed == total {
        Ok(0)
    } else {
        Ok(1)
    }
}
