//! Specs command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_specs;

/// Estimate system specs.
///
/// Detection exhaustion becomes `CliError::DetectionExhausted`, which
/// `main` turns into a manual-entry hint and exit code 1.
pub async fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let specs = ctx
        .orchestrator
        .detect_system_specs()
        .await
        .map_err(CliError::from)?;

    if json {
        let out = serde_json::to_string_pretty(&specs).map_err(CliError::from)?;
        println!("{out}");
    } else {
        println!("{}", format_specs(&specs));
    }
    Ok(())
}
