use super::CommandContext;
use crate::{constants::ENTITY_COLOR, document::EntityStore, error::Result};
use std::io::Write;

/// `color2`: recolors one picked entity.
pub fn change_color(context: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
    let document = context.document();
    let _lock = document.lock()?;

    let handle = context.gateway.get_entity_id("\nSelect the object to recolor: ");
    if handle.is_null() {
        log::info!("Nothing selected, no color changed");
        return Ok(());
    }

    document.open_for_write(handle, &mut |record| record.color = ENTITY_COLOR)?;
    writeln!(out, "Entity {handle} set to color {ENTITY_COLOR}.")?;
    Ok(())
}
