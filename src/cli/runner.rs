use crate::{
    cli::RunArgs,
    commands::{self, CommandContext, CommandMethod},
    config::DrawingConfig,
    document::InMemoryDocument,
    error::Result,
    prompt::{dialoguer::ConsoleSession, HostSession, Script, ScriptedSession},
};
use std::io::Write;

/// Runs one editor command against a drawing and reports the result
pub struct Runner {
    args: RunArgs,
}

impl Runner {
    pub fn new(args: RunArgs) -> Self {
        Self { args }
    }

    /// Loads the drawing, answers prompts from the script or the terminal
    /// and runs the command. Output goes to `out`.
    pub fn run(self, out: &mut dyn Write) -> Result<()> {
        let command = commands::find(&self.args.command)?;
        let document = self.load_document()?;

        match &self.args.script {
            Some(path) => {
                let session = ScriptedSession::from_script(Script::load(path)?);
                Self::execute(command, &session, &document, out)?;
                // The scripted host keeps its own pick set; fold it back into the drawing.
                document.replace_implied_selection(&session.implied_selection());
                if session.remaining() > 0 {
                    log::warn!("{} scripted answers were not used", session.remaining());
                }
            }
            None => {
                let session = ConsoleSession::new(&document);
                Self::execute(command, &session, &document, out)?;
            }
        }

        if self.args.dump {
            writeln!(out, "{}", serde_json::to_string_pretty(&document.snapshot())?)?;
        }
        Ok(())
    }

    fn load_document(&self) -> Result<InMemoryDocument> {
        match &self.args.drawing {
            Some(path) => DrawingConfig::load_config(path)?.build_document(),
            None => {
                log::debug!("No drawing given, starting from an empty one");
                Ok(InMemoryDocument::new())
            }
        }
    }

    fn execute(
        command: &CommandMethod,
        session: &dyn HostSession,
        document: &InMemoryDocument,
        out: &mut dyn Write,
    ) -> Result<()> {
        let context = CommandContext::new(session, document);
        command.invoke(&context, out)
    }
}

/// Runs a command, printing to standard output.
pub fn run(args: RunArgs) -> Result<()> {
    Runner::new(args).run(&mut std::io::stdout().lock())
}

/// Prints every registered command as `GROUP NAME (flags)`.
pub fn list(out: &mut dyn Write) -> Result<()> {
    for command in commands::registry() {
        writeln!(out, "{command}")?;
    }
    Ok(())
}
