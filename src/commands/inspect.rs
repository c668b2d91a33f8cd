use super::CommandContext;
use crate::error::Result;
use std::io::Write;

/// `inspect`: prints the picked entity as JSON.
pub fn inspect_entity(context: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
    match context.gateway.get_entity("\nSelect the object to inspect: ") {
        Some(record) => writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?,
        None => log::info!("Nothing selected"),
    }
    Ok(())
}
