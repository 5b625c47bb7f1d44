//! Paths command handler.
//!
//! Diagnostic view of launcher root resolution.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print every launcher's resolved root in `key = value` format.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}", ctx.resolver.resolve_all(ctx.os));
    Ok(())
}
