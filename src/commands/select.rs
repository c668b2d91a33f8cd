use super::CommandContext;
use crate::{
    document::{EntityStore, LayerTable},
    entity::EntityHandle,
    error::{Error, Result},
};
use std::io::Write;

const KEYWORDS: &[&str] = &["All", "Layer", "Clear"];

/// `select`: sets the implied selection to every entity, to one layer's
/// entities, or clears it.
pub fn select_entities(context: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
    let Some(choice) = context.gateway.get_keywords("\nSelect objects", KEYWORDS, 0, false) else {
        log::info!("Selection cancelled");
        return Ok(());
    };

    let document = context.document();
    let handles = match choice.as_str() {
        "All" => document.handles(),
        "Layer" => {
            let Some(layer) = context.gateway.get_string("\nLayer name: ", None, true) else {
                log::info!("Selection cancelled");
                return Ok(());
            };
            if !document.layer_names().contains(&layer) {
                return Err(Error::LayerNotFound(layer));
            }
            document.entities_on_layer(&layer)
        }
        _ => {
            context.gateway.unhighlight_objects(document.handles());
            context.gateway.set_pick_set(&[]);
            writeln!(out, "Selection cleared.")?;
            return Ok(());
        }
    };

    apply_selection(context, &handles);
    writeln!(out, "{} object(s) selected.", handles.len())?;
    Ok(())
}

fn apply_selection(context: &CommandContext<'_>, handles: &[EntityHandle]) {
    let document = context.document();
    context.gateway.unhighlight_objects(document.handles());
    context.gateway.set_pick_set(handles);
    let highlighted = context.gateway.highlight_objects(handles.iter().copied());
    log::debug!("Highlighted {highlighted} of {} objects", handles.len());
}
