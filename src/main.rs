use chrono::Local;
use clap::Parser;
use remind::application::{
    clean_note, list_recent_entries, ConfigService, IngestService, PulseOptions, PulseService,
};
use remind::cli::{format_entry_list, render_summary, Cli, Commands};
use remind::error::RemindError;
use remind::infrastructure::{Config, FileSystemRepository, ResilientAnalyzer, LOCAL_CONFIG_FILE};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// RUST_LOG wins over -v
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn journal_root(flag: Option<PathBuf>, config: &Config) -> FileSystemRepository {
    FileSystemRepository::new(flag.unwrap_or_else(|| config.journal_dir.clone()))
}

fn run(cli: Cli) -> Result<(), RemindError> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Pulse {
            journal_dir,
            days,
            offline,
            no_insight,
            json,
        } => {
            let repo = journal_root(journal_dir, &config);
            let analyzer = ResilientAnalyzer::from_config(&config.ollama, offline);
            let service = PulseService::new(repo, config.analysis_config(), analyzer);

            let mut options = PulseOptions::new(days.unwrap_or(config.days_back));
            options.include_insight = !no_insight;

            let report = match service.execute(&options) {
                Ok(report) => report,
                Err(RemindError::NoEntries(_)) => {
                    println!("No recent journal entries found.");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            if json {
                let rendered = serde_json::to_string_pretty(&report).map_err(|e| {
                    RemindError::Config(format!("Failed to serialize report: {}", e))
                })?;
                println!("{}", rendered);
            } else {
                print!("{}", render_summary(&report));
            }
            Ok(())
        }
        Commands::Clean { file } => {
            println!("{}", clean_note(&file)?);
            Ok(())
        }
        Commands::Ingest {
            journal_dir,
            output,
        } => {
            let service = IngestService::new(journal_root(journal_dir, &config));
            let report = service.execute(&output)?;

            println!(
                "Wrote {} cleaned entries to {}",
                report.written.len(),
                output.display()
            );
            if !report.skipped.is_empty() {
                println!("Skipped {} files without a date", report.skipped.len());
            }
            Ok(())
        }
        Commands::Entries { journal_dir, days } => {
            let repo = journal_root(journal_dir, &config);
            let entries =
                list_recent_entries(&repo, days.unwrap_or(config.days_back), Local::now())?;
            println!("{}", format_entry_list(&entries));
            Ok(())
        }
        Commands::Config { init } => {
            if init {
                let path = Path::new(LOCAL_CONFIG_FILE);
                ConfigService::init(path)?;
                println!("Created {}", path.display());
            } else {
                print!("{}", ConfigService::show(&config)?);
            }
            Ok(())
        }
    }
}
