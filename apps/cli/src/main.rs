mod replay;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use signsense_classifier::Sign;
use signsense_storage::Database;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "signsense", version, about = "Hand-sign recognition pipeline tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a recorded per-frame prediction stream through the stabilizer
    Replay {
        /// JSONL file of frame records: {"t_ms":…, "label":…, "confidence":…}
        #[arg(long)]
        input: PathBuf,
        /// Text log receiving one label per committed sign
        #[arg(long, default_value = "signs.txt")]
        journal: PathBuf,
        /// Optional SQLite history database to record commits into
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// List recorded commits, newest first
    History {
        #[arg(long, default_value = "history.db")]
        db: PathBuf,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Print the bundled sign vocabulary
    Signs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,signsense=debug")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Replay { input, journal, db } => replay::run(&input, &journal, db.as_deref()),
        Command::History { db, limit } => history(&db, limit),
        Command::Signs => {
            for sign in Sign::ALL {
                println!("{}  {}", sign.class_index(), sign.label());
            }
            Ok(())
        }
    }
}

fn history(db_path: &Path, limit: usize) -> anyhow::Result<()> {
    let db = Database::open(db_path)?;
    let commits = db.list_commits(limit)?;
    if commits.is_empty() {
        println!("no commits recorded");
        return Ok(());
    }
    for commit in commits {
        let recorded_at = DateTime::<Utc>::from_timestamp_millis(commit.recorded_at)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}  {:>8.1}s  {}",
            recorded_at,
            commit.ts_ms as f64 / 1000.0,
            commit.label
        );
    }
    Ok(())
}
