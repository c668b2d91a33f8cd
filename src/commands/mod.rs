//! Editor commands built on the prompt gateway
//!
//! Every command is a [`CommandMethod`] registered under a group name and
//! looked up case-insensitively. Handlers receive a [`CommandContext`]
//! holding the gateway and the drawing, plus the writer command output goes to.

use crate::{
    constants::COMMAND_GROUP,
    document::InMemoryDocument,
    error::{Error, Result},
    prompt::{HostSession, PromptGateway},
};
use std::{fmt::Display, io::Write};

pub mod color;
pub mod inspect;
pub mod layer;
pub mod select;

/// Gateway type every command works with.
pub type CommandGateway<'a> = PromptGateway<&'a dyn HostSession, &'a InMemoryDocument>;

/// How a command interacts with other running commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandFlags {
    /// Runs alone; nothing else may be active.
    Modal,
    /// May run while another command waits for input.
    Transparent,
}

impl Display for CommandFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CommandFlags::Modal => "modal",
            CommandFlags::Transparent => "transparent",
        };
        write!(f, "{s}")
    }
}

pub type CommandHandler = fn(&CommandContext<'_>, &mut dyn Write) -> Result<()>;

/// A named, invokable command.
#[derive(Clone, Copy)]
pub struct CommandMethod {
    pub group: &'static str,
    pub name: &'static str,
    pub flags: CommandFlags,
    pub handler: CommandHandler,
}

impl CommandMethod {
    pub fn invoke(&self, context: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
        log::info!("Running {} {}", self.group, self.name);
        (self.handler)(context, out)
    }
}

impl std::fmt::Debug for CommandMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandMethod")
            .field("group", &self.group)
            .field("name", &self.name)
            .field("flags", &self.flags)
            .finish()
    }
}

impl Display for CommandMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.group, self.name, self.flags)
    }
}

/// What a running command can reach.
pub struct CommandContext<'a> {
    pub gateway: CommandGateway<'a>,
}

impl<'a> CommandContext<'a> {
    pub fn new(session: &'a dyn HostSession, document: &'a InMemoryDocument) -> Self {
        Self { gateway: PromptGateway::new(session, document) }
    }

    pub fn document(&self) -> &'a InMemoryDocument {
        *self.gateway.store()
    }
}

const fn modal(name: &'static str, handler: CommandHandler) -> CommandMethod {
    CommandMethod { group: COMMAND_GROUP, name, flags: CommandFlags::Modal, handler }
}

static COMMANDS: &[CommandMethod] = &[
    modal("color2", color::change_color),
    modal("layer1", layer::create_layer),
    modal("layer2", layer::list_layers),
    modal("select", select::select_entities),
    modal("inspect", inspect::inspect_entity),
];

/// Every registered command, in registration order.
pub fn registry() -> &'static [CommandMethod] {
    COMMANDS
}

/// Looks a command up by name, ignoring case.
pub fn find(name: &str) -> Result<&'static CommandMethod> {
    COMMANDS
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| Error::UnknownCommand(name.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        document::EntityStore,
        entity::{EntityClass, EntityHandle},
        prompt::ScriptedSession,
    };

    /// Drawing with one line on "walls", a circle and a text on "0".
    pub(crate) fn sample_document() -> InMemoryDocument {
        use crate::document::LayerTable;
        let document = InMemoryDocument::new();
        document.add_layer("walls", 3).unwrap();
        document.add_entity(EntityClass::Line, "walls", 256).unwrap();
        document.add_entity(EntityClass::Circle, "0", 256).unwrap();
        document.add_entity(EntityClass::Text, "0", 2).unwrap();
        document
    }

    /// Runs `name` against `document` and returns what it printed.
    pub(crate) fn run(name: &str, session: &ScriptedSession, document: &InMemoryDocument) -> String {
        let context = CommandContext::new(session, document);
        let mut out = Vec::new();
        find(name).unwrap().invoke(&context, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(find("COLOR2").unwrap().name, "color2");
        assert_eq!(find(" Layer1 ").unwrap().name, "layer1");
    }

    #[test]
    fn test_find_unknown_command() {
        assert!(matches!(find("layer4"), Err(Error::UnknownCommand(name)) if name == "layer4"));
    }

    #[test]
    fn test_registry_is_modal_and_grouped() {
        assert_eq!(registry().len(), 5);
        for command in registry() {
            assert_eq!(command.group, "MyGroup");
            assert_eq!(command.flags, CommandFlags::Modal);
        }
        assert_eq!(registry()[0].to_string(), "MyGroup color2 (modal)");
    }

    #[test]
    fn test_context_exposes_document() {
        let document = sample_document();
        let session = ScriptedSession::new();
        let context = CommandContext::new(&session, &document);
        assert_eq!(context.document().handles().len(), 3);
        // An empty script fails the prompt, which reads as no pick.
        assert_eq!(context.gateway.get_entity_id("Pick"), EntityHandle::NULL);
    }
}
