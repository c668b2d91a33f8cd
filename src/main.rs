use cadprompt::{
    cli::{get_log_level_from_verbose, list, parse_cli, run, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let level = get_log_level_from_verbose(cli.command.verbose());
    env_logger::Builder::new().filter_level(level).init();

    let result = match cli.command {
        Commands::Run(args) => run(args),
        Commands::List => list(&mut std::io::stdout().lock()),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
