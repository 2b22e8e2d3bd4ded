use clap::Parser;
use kana_cli::core::catalog::Catalog;
use kana_cli::core::config::{self, CliOverrides, KanaConfig, ResolvedConfig};
use kana_cli::core::error::AppError;
use kana_cli::core::exercise::ExerciseType;
use kana_cli::core::history::HistoryStore;
use kana_cli::core::scoring::Scorer;
use kana_cli::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

/// Readings listed in the "Most urgent" column of `--stats`.
const URGENT_SHOWN: usize = 3;

#[derive(Parser)]
#[command(name = "kana", about = "Spaced-repetition hiragana and katakana trainer")]
struct Args {
    /// History file (default: ~/.kana/kana-practice-history.json)
    #[arg(long)]
    history: Option<std::path::PathBuf>,

    /// Start directly in this drill
    #[arg(short, long, value_enum)]
    exercise: Option<ExerciseType>,

    /// Options per question (min 2)
    #[arg(short, long = "options")]
    option_count: Option<usize>,

    /// Fixed RNG seed for reproducible drills
    #[arg(long)]
    seed: Option<u64>,

    /// Print statistics for every drill and exit
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to ~/.kana/kana.log
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = std::env::var("KANA_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    if let Ok(log_file) = File::create(config::log_path()) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Kana trainer starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        eprintln!("Warning: {e}; using defaults");
        KanaConfig::default()
    });
    let cli = CliOverrides {
        history: args.history,
        exercise: args.exercise,
        option_count: args.option_count,
        seed: args.seed,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Resolved config: {:?}", resolved);

    let result = if args.stats {
        print_statistics(&resolved)
    } else {
        tui::run(resolved)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_statistics(config: &ResolvedConfig) -> Result<(), AppError> {
    let catalog = Catalog::builtin()?;
    let history = HistoryStore::load(&config.history_path);
    let scorer = Scorer::new(history.records());

    println!("History: {} ({} records)", history.path().display(), history.len());
    println!(
        "{:<30} {:>9} {:>11} {:>5} {:>8}  Most urgent",
        "Exercise", "Practiced", "Often wrong", "Due", "Accuracy"
    );
    for exercise in ExerciseType::ALL {
        let stats = scorer.statistics(exercise);
        println!(
            "{:<30} {:>9} {:>11} {:>5} {:>7.0}%  {}",
            exercise.label(),
            stats.total_practiced,
            stats.frequently_wrong_count,
            stats.needs_review_count,
            stats.average_accuracy * 100.0,
            urgent_summary(&scorer.most_urgent(exercise, URGENT_SHOWN))
        );
    }
    println!("{} kana in the catalog", catalog.len());
    Ok(())
}

/// `ka (9600) sa (40)`, or `-` when nothing was practiced.
fn urgent_summary(urgent: &[(String, f64)]) -> String {
    if urgent.is_empty() {
        return "-".to_string();
    }
    urgent
        .iter()
        .map(|(reading, score)| format!("{reading} ({score:.0})"))
        .collect::<Vec<_>>()
        .join(" ")
}
