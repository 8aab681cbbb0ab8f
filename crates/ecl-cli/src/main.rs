//! # ecl CLI entry point
//!
//! Parses command-line arguments, resolves configuration and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ecl_cli::config::EclConfig;
use ecl_cli::contract::{run_contract, ContractCommand};
use ecl_cli::dispute::{run_dispute, DisputeArgs};
use ecl_cli::history::{run_history, HistoryArgs};
use ecl_cli::open_registry;

/// Employment contract ledger.
///
/// Creates, approves, extends and terminates employment contracts, tracks
/// disputes raised against them, and summarises each party's history.
#[derive(Parser, Debug)]
#[command(name = "ecl", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the ledger records.
    #[arg(long, env = "ECL_LEDGER_DIR", global = true)]
    ledger_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Contract(ContractCommand),

    /// Dispute management (issue, update, close, respond).
    Dispute(DisputeArgs),

    /// Summarise a party's contracts and disputes.
    History(HistoryArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = EclConfig::load_optional(cli.config.as_deref())?;
    let ledger_dir = config.resolve_ledger_dir(cli.ledger_dir.as_deref());
    tracing::debug!(ledger_dir = %ledger_dir.display(), "resolved ledger directory");

    let registry = open_registry(&ledger_dir, config.policy)?;
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Commands::Contract(command) => run_contract(command, &registry, &mut stdout),
        Commands::Dispute(args) => run_dispute(args, &registry, &mut stdout),
        Commands::History(args) => run_history(args, &registry, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecl_cli::history::RoleArg;

    #[test]
    fn parse_create_inline() {
        let cli = Cli::try_parse_from(["ecl", "create", "--json", "{}"]).unwrap();
        match cli.command {
            Commands::Contract(ContractCommand::Create(input)) => {
                assert_eq!(input.json.as_deref(), Some("{}"));
                assert!(input.file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn create_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["ecl", "create"]).is_err());
        assert!(
            Cli::try_parse_from(["ecl", "create", "--json", "{}", "--file", "c.json"]).is_err()
        );
    }

    #[test]
    fn parse_extend() {
        let cli =
            Cli::try_parse_from(["ecl", "extend", "--id", "C1", "--to", "12/31/2027"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Contract(ContractCommand::Extend { ref id, ref to })
                if id == "C1" && to == "12/31/2027"
        ));
    }

    #[test]
    fn parse_dispute_respond() {
        let cli = Cli::try_parse_from([
            "ecl", "dispute", "respond", "--id", "C1", "--dispute", "0", "--content", "ok",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Dispute(_)));
    }

    #[test]
    fn parse_history_with_global_flags() {
        let cli = Cli::try_parse_from([
            "ecl",
            "history",
            "--party",
            "EE-42",
            "--role",
            "employer",
            "-vv",
            "--ledger-dir",
            "/tmp/ledger",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.ledger_dir, Some(PathBuf::from("/tmp/ledger")));
        match cli.command {
            Commands::History(args) => {
                assert_eq!(args.party, "EE-42");
                assert!(matches!(args.role, RoleArg::Employer));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_role_rejected() {
        assert!(Cli::try_parse_from(["ecl", "history", "--party", "P", "--role", "boss"]).is_err());
    }
}
