//! Entry point for the `solar` binary.
//!
//! Parses the command line and dispatches to the matching command. Errors
//! are logged through the structured logger before exiting with a failure
//! status.

use anyhow::Result;
use std::path::Path;

use solar::args::{self, CliAction, ParsedArgs};
use solar::commands;
use solar::common::constants::EXIT_FAILURE;
use solar::{log_end, log_error_exit, log_indented};

fn main() -> Result<()> {
    let parsed_args = ParsedArgs::from_env();

    let result = match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Run {
            debug_enabled,
            config_dir,
            overrides,
            now,
            json,
        } => commands::handle_report_command(
            debug_enabled,
            config_dir.as_deref().map(Path::new),
            &overrides,
            now,
            json,
        ),
        CliAction::Whitepoint { temperature, json } => {
            commands::handle_whitepoint_command(temperature, json)
        }
    };

    if let Err(e) = result {
        log_error_exit!("{e}");
        for cause in e.chain().skip(1) {
            log_indented!("{cause}");
        }
        log_end!();
        std::process::exit(EXIT_FAILURE);
    }

    Ok(())
}
