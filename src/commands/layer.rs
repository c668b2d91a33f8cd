use super::CommandContext;
use crate::{
    constants::{DEFAULT_COLOR, NEW_LAYER_NAME},
    document::LayerTable,
    error::Result,
};
use std::io::Write;

/// `layer1`: adds the layer "luck".
pub fn create_layer(context: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
    context.document().add_layer(NEW_LAYER_NAME, DEFAULT_COLOR)?;
    writeln!(out, "Layer '{NEW_LAYER_NAME}' created.")?;
    Ok(())
}

/// `layer2`: prints every layer name, one per line.
pub fn list_layers(context: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
    for name in context.document().layer_names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{
        tests::{run, sample_document},
        CommandContext,
    };
    use crate::{document::LayerTable, error::Error, prompt::ScriptedSession};

    #[test]
    fn test_create_then_list() {
        let document = sample_document();
        let session = ScriptedSession::new();

        assert_eq!(run("layer1", &session, &document), "Layer 'luck' created.\n");
        assert_eq!(run("layer2", &session, &document), "0\nwalls\nluck\n");
        assert!(session.prompts().is_empty());
    }

    #[test]
    fn test_create_twice_fails() {
        let document = sample_document();
        document.add_layer("luck", 1).unwrap();
        let session = ScriptedSession::new();
        let context = CommandContext::new(&session, &document);

        let result = super::create_layer(&context, &mut Vec::new());
        assert!(matches!(result, Err(Error::LayerExists(name)) if name == "luck"));
    }
}
