//! Argument parsing and command dispatch for the `screener` binary.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::{self, OutputFormat, ScreenerConfig};

#[derive(Parser)]
#[command(name = "screener")]
#[command(about = "Score clinical screening questionnaires")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List supported instruments
    List,

    /// Print the validation schema of an instrument
    Schema {
        /// Instrument id (phq9, asrs, audit)
        id: String,
    },

    /// Score a screening request read from a JSON file ("-" for stdin)
    Score { file: PathBuf },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config
    Show,
}

/// Run one command and return what it prints.
///
/// `config init` never reads the existing file, so a corrupt or too-new
/// config can always be replaced. Every other command loads the config and
/// hands it to `on_config` before doing any work.
pub fn run(
    cli: Cli,
    on_config: impl FnOnce(&ScreenerConfig) -> eyre::Result<()>,
) -> eyre::Result<String> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    if let Commands::Config {
        command: ConfigCommands::Init { force },
    } = cli.command
    {
        return commands::config_init(&config_path, force);
    }

    let config = config::load_config(&config_path)?;
    on_config(&config)?;

    let format = cli.format.unwrap_or(config.output);
    match cli.command {
        Commands::List => commands::list(format),
        Commands::Schema { id } => commands::schema(&id),
        Commands::Score { file } => {
            let input = read_input(&file)?;
            commands::score(&input, &config, format)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init { force } => commands::config_init(&config_path, force),
            ConfigCommands::Show => commands::config_show(&config),
        },
    }
}

fn read_input(file: &Path) -> eyre::Result<String> {
    if file.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    std::fs::read_to_string(file)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", file.display()))
}
