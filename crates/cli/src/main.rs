//! # Ironwood DNS
//!
//! Iterative DNS resolution simulator over an in-memory authority tree.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use ironwood_dns_application::ResolveHostUseCase;
use ironwood_dns_domain::{CliOverrides, RecordType};
use ironwood_dns_infrastructure::resolver::write_transcript;
use ironwood_dns_infrastructure::{ResolutionEngine, Resolver};
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "ironwood-dns")]
#[command(version)]
#[command(about = "Simulates iterative DNS resolution over an in-memory authority tree")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Domain list file, one dotted name per line
    #[arg(short, long)]
    domains: Option<PathBuf>,

    /// Resource record file
    #[arg(short, long)]
    records: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Maximum authorities visited per resolution attempt
    #[arg(long)]
    hop_limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a name against the loaded authority tree
    Resolve {
        /// Fully-qualified name to resolve
        name: String,

        /// Record type to ask for
        #[arg(short = 't', long, default_value = "A")]
        record_type: RecordType,

        /// Print the per-step resolution transcript
        #[arg(long)]
        trace: bool,

        /// Also write the transcript under this directory
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },
    /// Print the authority tree
    Tree,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        domains_file: cli.domains,
        records_file: cli.records,
        log_level: cli.log_level,
        hop_limit: cli.hop_limit,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let tree = bootstrap::load_zone(&config)?;

    match cli.command {
        Command::Tree => {
            print!("{}", tree.render());
        }
        Command::Resolve {
            name,
            record_type,
            trace,
            log_dir,
        } => {
            let engine = Arc::new(ResolutionEngine::with_hop_limit(
                Arc::new(tree),
                config.resolver.hop_limit,
            ));

            if trace || log_dir.is_some() {
                resolve_with_transcript(&engine, &name, record_type, trace, log_dir).await?;
            } else {
                let resolver = Arc::new(Resolver::new(engine));
                let use_case = ResolveHostUseCase::new(resolver);
                let resolution = use_case.execute(&name, record_type).await;
                match resolution.address {
                    Some(address) => println!("{name} -> {address}"),
                    None => println!("{name}: no {record_type} record found"),
                }
            }
        }
    }

    Ok(())
}

/// Drives the engine directly so the per-attempt trace stays reachable.
async fn resolve_with_transcript(
    engine: &ResolutionEngine,
    name: &str,
    record_type: RecordType,
    print_trace: bool,
    log_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let handle = engine.query(name, record_type);
    let record = engine.resolve(handle).await;
    let lines = engine.take_trace(handle).unwrap_or_default();

    if print_trace {
        for line in &lines {
            println!("{line}");
        }
    }
    if let Some(dir) = log_dir {
        let path = write_transcript(&dir, name, &lines)?;
        info!(path = %path.display(), "Transcript written");
    }

    match record {
        Some(record) if !record.is_not_found() => println!("{name} -> {}", record.rdata),
        _ => println!("{name}: no {record_type} record found"),
    }

    Ok(())
}
