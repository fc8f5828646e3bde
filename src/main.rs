use clap::Parser;

use pixelveil::{
    cli::{Cli, Commands},
    handler::{handle_hide, handle_recover},
};

/// Entry point of the program.
///
/// Parses the command line and dispatches to the handler of the chosen
/// subcommand (`hide` or `recover`).
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Recover(args) => handle_recover(args),
    }
}
