//! Command-line argument parsing and processing.
//!
//! Turns the raw arguments into a [`CliAction`] for `main` to dispatch.
//! Options are accepted with one or two leading dashes and with their value
//! either as the next argument or after `=`, so `--lat 34.1`, `-lat 34.1`
//! and `--lat=34.1` are equivalent. Values may be negative (`--long -118.2`).

use crate::config::Config;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print the report for the configured position
    Run {
        debug_enabled: bool,
        config_dir: Option<String>,
        /// Settings given as flags, layered over the config file
        overrides: Config,
        /// Unix time to report on instead of the system clock
        now: Option<i64>,
        json: bool,
    },
    /// Print the whitepoint of a color temperature
    Whitepoint { temperature: f64, json: bool },

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit with an error
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

/// Split `--name=value` into its parts, normalizing a single leading dash on
/// long names to two.
fn split_flag(arg: &str) -> (String, Option<String>) {
    let (name, value) = match arg.split_once('=') {
        Some((name, value)) => (name, Some(value.to_string())),
        None => (arg, None),
    };

    let name = if !name.starts_with("--") && name.len() > 2 {
        format!("-{name}")
    } else {
        name.to_string()
    };
    (name, value)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Option<T> {
    let Some(value) = value else {
        log_warning!("Missing value for {flag}");
        return None;
    };

    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log_warning!("Invalid value for {flag}: {value}");
            None
        }
    }
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut json = false;
        let mut unknown_arg_found = false;
        let mut config_dir: Option<String> = None;
        let mut now: Option<i64> = None;
        let mut overrides = Config::default();
        let mut positionals: Vec<String> = Vec::new();

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];

            if !arg_str.starts_with('-') || arg_str == "-" {
                positionals.push(arg_str.clone());
                i += 1;
                continue;
            }

            let (flag, inline_value) = split_flag(arg_str);

            // Options taking a value read it inline or from the next argument,
            // whatever it looks like.
            let mut take_value = || {
                inline_value.clone().or_else(|| {
                    let next = args_vec.get(i + 1).cloned();
                    if next.is_some() {
                        i += 1;
                    }
                    next
                })
            };

            match flag.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--json" | "-j" => json = true,
                "--config" | "-c" => match take_value() {
                    Some(dir) => config_dir = Some(dir),
                    None => {
                        log_warning!("Missing directory for --config. Usage: --config <directory>");
                        unknown_arg_found = true;
                    }
                },
                "--lat" => {
                    overrides.latitude = parse_value(&flag, take_value());
                    unknown_arg_found |= overrides.latitude.is_none();
                }
                "--long" => {
                    overrides.longitude = parse_value(&flag, take_value());
                    unknown_arg_found |= overrides.longitude.is_none();
                }
                "--lo" => {
                    overrides.low_temp = parse_value(&flag, take_value());
                    unknown_arg_found |= overrides.low_temp.is_none();
                }
                "--hi" => {
                    overrides.high_temp = parse_value(&flag, take_value());
                    unknown_arg_found |= overrides.high_temp.is_none();
                }
                "--now" => {
                    now = parse_value(&flag, take_value());
                    unknown_arg_found |= now.is_none();
                }
                "--tz" => {
                    overrides.timezone = parse_value(&flag, take_value());
                    unknown_arg_found |= overrides.timezone.is_none();
                }
                "--format" | "-t" => {
                    overrides.time_format = parse_value(&flag, take_value());
                    unknown_arg_found |= overrides.time_format.is_none();
                }
                _ => {
                    log_warning!("Unknown option: {arg_str}");
                    unknown_arg_found = true;
                }
            }
            i += 1;
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else if display_help {
            CliAction::ShowHelp
        } else {
            match positionals.split_first() {
                None => CliAction::Run {
                    debug_enabled,
                    config_dir,
                    overrides,
                    now,
                    json,
                },
                Some((command, rest)) if matches!(command.as_str(), "whitepoint" | "w") => {
                    Self::parse_whitepoint(rest, json)
                }
                Some((command, _)) => {
                    log_warning!("Unknown command: {}", command);
                    CliAction::ShowHelpDueToError
                }
            }
        };

        ParsedArgs { action }
    }

    fn parse_whitepoint(rest: &[String], json: bool) -> CliAction {
        match rest {
            [kelvin] => match kelvin.trim_end_matches(['K', 'k']).parse::<f64>() {
                Ok(temperature) => CliAction::Whitepoint { temperature, json },
                Err(_) => {
                    log_warning!("Invalid temperature: {kelvin}. Usage: solar whitepoint <kelvin>");
                    CliAction::ShowHelpDueToError
                }
            },
            [] => {
                log_warning!("Missing temperature. Usage: solar whitepoint <kelvin>");
                CliAction::ShowHelpDueToError
            }
            [_, extra, ..] => {
                log_warning!("Unexpected argument: {extra}. Usage: solar whitepoint <kelvin>");
                CliAction::ShowHelpDueToError
            }
        }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::logger::write_output(&format!("┗ {}\n", env!("CARGO_PKG_DESCRIPTION")));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("solar [OPTIONS]");
    log_indented!("solar whitepoint <kelvin> [--json]");
    log_block_start!("Options:");
    log_indented!("--lat <degrees>        Latitude, -90 to 90 (default: 0)");
    log_indented!("--long <degrees>       Longitude, -180 to 180 (default: from timezone)");
    log_indented!("--lo <kelvin>          Night color temperature (default: 4000)");
    log_indented!("--hi <kelvin>          Day color temperature (default: 6500)");
    log_indented!("--now <unix seconds>   Report on this time instead of now");
    log_indented!("--tz <name>            IANA timezone, e.g. Europe/Berlin (default: system)");
    log_indented!("-t, --format <fmt>     strftime format for times (default: %H:%M:%S)");
    log_indented!("-j, --json             Print JSON instead of text");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("whitepoint, w <kelvin> Print RGB multipliers for a color temperature");
    log_end!();
}
