use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use turtle::{report, Limits, Loader, SequenceReport, DEFAULT_MAX_BOARD_SIZE};

/// Wrong or missing arguments.
const EXIT_USAGE: i32 = -1;
/// The settings file could not be read or is invalid.
const EXIT_SETTINGS: i32 = -2;
/// The sequence file could not be read or is invalid.
const EXIT_SEQUENCES: i32 = -3;

/// Runs every move sequence against a minefield and reports where the turtle ended up.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  turtle-cli game-settings.txt moves.txt
  turtle-cli --json game-settings.txt moves.txt")]
struct Cli {
    /// Settings file: board size, turtle start, exit and one mine per line
    settings: PathBuf,

    /// Sequence file: one sequence of 'm' (move) and 'r' (rotate) per line
    sequences: PathBuf,

    /// Largest accepted number of board columns or rows
    #[clap(long, default_value_t = DEFAULT_MAX_BOARD_SIZE)]
    max_board_size: u32,

    /// Print the results as JSON
    #[clap(long)]
    json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[clap(short = 'd', long)]
    debug: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(EXIT_USAGE);
        }
    };

    init_tracing(cli.debug);
    process::exit(run(&cli));
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> i32 {
    let limits = Limits {
        max_board_size: cli.max_board_size,
    };

    let settings = match Loader::load_settings(&cli.settings, &limits) {
        Ok(settings) => settings,
        Err(e) => {
            error!(path = %cli.settings.display(), "invalid settings file");
            eprintln!("Invalid settings file data\n{}", e);
            return EXIT_SETTINGS;
        }
    };

    let sequences = match Loader::load_sequences(&cli.sequences) {
        Ok(sequences) => sequences,
        Err(e) => {
            error!(path = %cli.sequences.display(), "invalid sequence file");
            eprintln!("Invalid sequence file data\n{}", e);
            return EXIT_SEQUENCES;
        }
    };

    info!(sequences = sequences.len(), "running simulations");
    print_reports(&report(&settings, &sequences), cli.json);

    0
}

fn print_reports(reports: &[SequenceReport], json: bool) {
    if json {
        match serde_json::to_string_pretty(reports) {
            Ok(output) => println!("{}", output),
            Err(e) => error!("failed to serialize results: {}", e),
        }
    } else {
        for report in reports {
            println!("{}", report);
        }
    }
}
