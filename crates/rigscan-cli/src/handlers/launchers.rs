//! Launchers command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::format_launchers;

/// Probe every launcher's URL scheme and report which handlers answered.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let presence = ctx.orchestrator.detect_launchers().await;
    println!("{}", format_launchers(&presence));
    Ok(())
}
