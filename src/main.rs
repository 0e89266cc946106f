use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod battery_info;
mod error;
mod ioreg;
mod report;

use battery_info::BatteryInfo;
use error::{Error, Result};
use report::{Metric, Palette, Report, Style};

#[derive(Parser)]
#[command(name = "batinfo", version)]
#[command(about = "Show battery health, temperature and charge on macOS", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Disable colors and text styling
    #[arg(long, global = true)]
    plain: bool,

    /// Read a saved `ioreg -r -c AppleSmartBattery` dump instead of running ioreg ("-" for stdin)
    #[arg(long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Show every metric
    All,
    /// Show only battery health
    Health,
    /// Show only temperature
    Temp,
    /// Show only the cycle count
    Cycles,
    /// Show only charge information
    Charge,
}

impl Commands {
    /// The single metric to show, or `None` for the full report.
    fn metric(self) -> Option<Metric> {
        match self {
            Commands::All => None,
            Commands::Health => Some(Metric::Health),
            Commands::Temp => Some(Metric::Temperature),
            Commands::Cycles => Some(Metric::Cycles),
            Commands::Charge => Some(Metric::Charge),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    let read = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    };
    read.map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

fn run(cli: &Cli) -> Result<()> {
    let text = match &cli.input {
        Some(path) => {
            info!(path = %path.display(), "reading saved ioreg output");
            read_input(path)?
        }
        None => ioreg::query()?,
    };

    let battery = BatteryInfo::from_ioreg(&text)?;
    debug!(?battery, "parsed battery properties");

    let style = if cli.plain { Style::Plain } else { Style::Colorful };
    let report = Report::new(&battery, Palette::default(), style);
    match cli.command.unwrap_or(Commands::All).metric() {
        Some(metric) => println!("{}", report.line(metric)),
        None => print!("{report}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
