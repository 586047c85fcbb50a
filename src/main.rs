//! chell - render WAV waveforms as character art in the terminal.
//!
//! Two drawing styles are available:
//!
//! 1. **braille**: a continuous trace using Unicode braille cells, giving
//!    2x4 dots of resolution per character.
//!
//! 2. **ascii**: a centered block bar per column sized by its loudest sample,
//!    with a dot marking near-silent columns.
//!
//! Output is plain text sized to the current terminal, so it can be piped or
//! pasted anywhere. Defaults for the mode and height live in the user config.

use clap::{CommandFactory, Parser, Subcommand, builder::PossibleValuesParser};
use clap_complete::{Generator, Shell, generate};
use owo_colors::OwoColorize;
use std::error::Error;
use std::io;

mod cli;

#[derive(Parser)]
#[command(name = "chell")]
#[command(about = "Render WAV waveforms as braille or block art in the terminal")]
#[command(version)]
struct Cli {
    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the waveform of a WAV file
    Render {
        /// Path to the WAV file
        file: String,
        /// Render mode: braille|ascii (defaults to the configured mode)
        #[arg(short, long)]
        mode: Option<String>,
        /// Vertical character rows used for rendering (0 = fill the terminal)
        #[arg(short = 'H', long, allow_negative_numbers = true)]
        height: Option<i32>,
    },
    /// Show format details for a WAV file
    Info {
        /// Path to the WAV file
        file: String,
    },
    /// Write a default configuration file
    Init,
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// View current configuration
    View,
    /// Set a configuration value
    Set {
        /// Configuration key
        #[arg(value_parser = PossibleValuesParser::new(["default_mode", "default_height", "log_file"]))]
        key: String,
        /// Configuration value
        value: String,
    },
    /// Edit configuration file in your editor
    Edit,
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}

fn init_logging(verbose: u8) -> Result<(), Box<dyn Error>> {
    use simplelog::*;

    let term_level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    // An unreadable config or unopenable log file only costs the file log;
    // the command itself still runs and reports config errors
    if let Some(file) = chell::config::Config::load()
        .ok()
        .and_then(|config| config.open_log_file())
    {
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

/// User-facing text for an error that ended the command
fn error_message(err: &dyn Error) -> String {
    format!("{} {err}", "Error:".red().bold())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", error_message(e.as_ref()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Render { file, mode, height } => {
            cli::render::handle_render(&file, mode.as_deref(), height)?;
        }
        Commands::Info { file } => {
            cli::info::handle_info(&file)?;
        }
        Commands::Init => {
            cli::init::handle_init()?;
        }
        Commands::Config { action } => match action {
            ConfigAction::View => {
                cli::config::handle_config_view()?;
            }
            ConfigAction::Set { key, value } => {
                cli::config::handle_config_set(&key, &value)?;
            }
            ConfigAction::Edit => {
                cli::config::handle_config_edit()?;
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chell::waveform::RenderError;

    #[test]
    fn test_error_message_uses_display() {
        let err = RenderError::UnknownMode("spectrogram".to_string());
        let message = error_message(&err);
        assert!(message.contains("unknown mode \"spectrogram\""));
        assert!(!message.contains("UnknownMode("));
        assert!(message.contains("Error:"));
    }

    #[test]
    fn test_error_message_has_single_prefix() {
        let err = chell::utils::validation::validate_path_exists(std::path::Path::new(
            "/this/path/does/not/exist/hopefully/12345",
        ))
        .unwrap_err();
        let message = error_message(err.as_ref());
        assert_eq!(message.matches("Error:").count(), 1);
        assert!(message.contains("Path does not exist"));
    }
}
