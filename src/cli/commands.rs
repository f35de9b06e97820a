use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use crate::aliases::{AliasSource, InteractiveShell, PipedInput, Unavailable, load_aliases};
use crate::logging;
use crate::models::AliasTable;
use crate::report::{render_json, render_text};
use crate::storage::load_history;
use crate::tally::build_tally;
use crate::utils::resolve_db_path;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AliasMode {
    /// Piped stdin if present, otherwise the interactive shell
    Auto,
    /// Only read `name=expansion` lines from stdin
    Stdin,
    /// Only ask $SHELL for its aliases
    Shell,
    /// Count commands without alias resolution
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "atuin-stats")]
#[command(version)]
#[command(about = "Show your most used shell commands from Atuin history", long_about = None)]
pub struct Cli {
    /// Path to the Atuin history database (also: ATUIN_DB_PATH)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Number of commands to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Where to read shell aliases from
    #[arg(long, value_enum, default_value_t = AliasMode::Auto)]
    pub aliases: AliasMode,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let db_path = resolve_db_path(cli.db.as_deref())?;
    let aliases = load_alias_table(cli.aliases, io::stdin().is_terminal());
    let report = generate_report(&db_path, &aliases, cli.top, cli.format)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.as_bytes()).context("Failed to write report to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Pick the alias source for `mode`
///
/// Stdin attached to a terminal never counts as piped input; reading it would block on
/// the user.
pub fn select_alias_source(mode: AliasMode, stdin_is_terminal: bool) -> Option<Box<dyn AliasSource>> {
    match mode {
        AliasMode::None => None,
        AliasMode::Shell => Some(Box::new(InteractiveShell::from_env())),
        AliasMode::Auto if stdin_is_terminal => Some(Box::new(InteractiveShell::from_env())),
        AliasMode::Stdin if stdin_is_terminal => {
            Some(Box::new(Unavailable::new("stdin is a terminal, nothing was piped in")))
        }
        AliasMode::Auto | AliasMode::Stdin => Some(Box::new(PipedInput::new(io::stdin()))),
    }
}

fn load_alias_table(mode: AliasMode, stdin_is_terminal: bool) -> AliasTable {
    match select_alias_source(mode, stdin_is_terminal) {
        Some(mut source) => load_aliases(source.as_mut()),
        None => {
            info!("Alias resolution disabled");
            AliasTable::new()
        }
    }
}

/// Read the history at `db_path` and render the top `top_n` commands
///
/// Storage failures are recovered inside and produce a report with no rows.
pub fn generate_report(
    db_path: &Path,
    aliases: &AliasTable,
    top_n: usize,
    format: OutputFormat,
) -> Result<String> {
    let records = load_history(db_path);
    let tally = build_tally(&records, aliases);
    let top = tally.top(top_n);

    match format {
        OutputFormat::Text => Ok(render_text(top_n, &top)),
        OutputFormat::Json => {
            render_json(top_n, tally.total(), &top).context("Failed to serialize report")
        }
    }
}
