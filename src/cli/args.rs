use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI for cadprompt.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one editor command against a drawing.
    Run(RunArgs),
    /// List the registered commands.
    List,
}

/// Arguments of `cadprompt run`.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Command name, case-insensitive.
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Drawing file, or a directory holding `cadprompt.yaml`.
    #[arg(short, long)]
    pub drawing: Option<PathBuf>,

    /// Answer prompts from a script instead of the terminal.
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Print the drawing as JSON when the command finishes.
    #[arg(long)]
    pub dump: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Commands {
    pub fn verbose(&self) -> u8 {
        match self {
            Commands::Run(args) => args.verbose,
            Commands::List => verbosity::OFF,
        }
    }
}

/// Parse command line arguments, printing the full help when nothing was given.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            || e.kind() == ErrorKind::MissingRequiredArgument
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_run() {
        let cli = Cli::parse_from(["cadprompt", "run", "layer2"]);
        let Commands::Run(args) = cli.command else { panic!("expected run") };
        assert_eq!(args.command, "layer2");
        assert!(args.drawing.is_none());
        assert!(args.script.is_none());
        assert!(!args.dump);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_full_run() {
        let cli = Cli::parse_from([
            "cadprompt",
            "run",
            "color2",
            "--drawing",
            "drawing.yaml",
            "--script",
            "answers.json",
            "--dump",
            "-vv",
        ]);
        assert_eq!(cli.command.verbose(), 2);
        let Commands::Run(args) = cli.command else { panic!("expected run") };
        assert_eq!(args.command, "color2");
        assert_eq!(args.drawing, Some(PathBuf::from("drawing.yaml")));
        assert_eq!(args.script, Some(PathBuf::from("answers.json")));
        assert!(args.dump);
    }

    #[test]
    fn parses_list() {
        let cli = Cli::parse_from(["cadprompt", "list"]);
        assert!(matches!(cli.command, Commands::List));
        assert_eq!(cli.command.verbose(), verbosity::OFF);
    }

    #[test]
    fn run_requires_a_command() {
        let err = Cli::try_parse_from(["cadprompt", "run"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
