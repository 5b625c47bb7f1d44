//! Games command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_games_table;

/// List installed games as a table or JSON array.
pub async fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let games = ctx.orchestrator.detect_installed_games().await;

    if json {
        let out = serde_json::to_string_pretty(&games).map_err(CliError::from)?;
        println!("{out}");
    } else {
        println!("{}", format_games_table(&games));
    }
    Ok(())
}
