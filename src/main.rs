mod common;
mod ui;
mod wizard;

use clap::Parser;
use ui::OutputFormat;
use ui::prelude::*;

use crate::wizard::{WizardCommands, handle_wizard_command};

/// Sundial onboarding wizard
#[derive(Parser, Debug)]
#[command(name = "sundial", author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    /// Output format for messages
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<WizardCommands>,
}

fn main() {
    let cli = Cli::parse();

    ui::init(cli.output, !cli.no_color);
    ui::set_debug_mode(cli.debug);

    if cli.debug {
        emit(Level::Debug, "debug.enabled", "Debug mode is on", None);
    }

    if let Err(e) = handle_wizard_command(cli.command, cli.debug) {
        emit(
            Level::Error,
            "sundial.error",
            &format!("{} {:#}", char::from(NerdFont::Cross), e),
            None,
        );
        std::process::exit(1);
    }
}
