use athenstays::config::RenderConfig;
use athenstays::data::{DataError, Snapshot};
use athenstays::seed::SeedError;
use athenstays::site::GenerateError;
use athenstays::{output, seed, site};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "athenstays")]
#[command(about = "Static site generator for the Athens hotel comparison site")]
#[command(long_about = "\
Static site generator for the Athens hotel comparison site

Curated JSON records in, static HTML out. The data directory is the source
of truth; every run regenerates the whole site from it.

Data layout:

  data/
  ├── neighborhoods.json           # Neighborhood catalog
  ├── hotels/
  │   ├── plaka.json               # One hotel listing per neighborhood
  │   └── koukaki.json
  └── hotels-index.json            # Consolidated export (written by seed)

Output layout:

  dist/
  ├── index.html                   # Home: neighborhood grid + highlights
  ├── neighborhoods/<id>/          # One page per neighborhood
  ├── hotels/<slug>/               # One page per hotel
  ├── guides/{budget,luxury,rooftop}/
  ├── contact/  thank-you/
  └── sitemap.xml  robots.txt  _headers  _redirects

Configuration: set ATHENSTAYS_FORM_ID to your form-submission id; the
contact page falls back to a placeholder endpoint without it.

Exit codes: 0 success, 2 input-data error, 3 filesystem error.")]
#[command(version)]
struct Cli {
    /// Data directory
    #[arg(long, default_value = "data", global = true)]
    data: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the curated starter dataset into the data directory
    Seed {
        /// Overwrite an existing data store
        #[arg(long)]
        force: bool,
    },
    /// Load and validate the data store without writing anything
    Check,
    /// Render the full static site
    Generate,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl AppError {
    /// Exit-code taxonomy: input-data problems are 2, write-side problems 3.
    fn exit_code(&self) -> i32 {
        match self {
            AppError::Data(_) => 2,
            AppError::Seed(_) | AppError::Generate(_) => 3,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let today = Utc::now().date_naive();

    match cli.command {
        Command::Seed { force } => {
            let summary = seed::seed(&cli.data, force, today)?;
            output::print_seed_output(&summary, &cli.data);
        }
        Command::Check => {
            println!("==> Checking {}", cli.data.display());
            let snapshot = Snapshot::load(&cli.data, today)?;
            output::print_check_output(&snapshot);
            println!("==> Data is consistent");
        }
        Command::Generate => {
            println!("==> Loading {}", cli.data.display());
            let snapshot = Snapshot::load(&cli.data, today)?;
            println!(
                "==> Generating {} hotels across {} neighborhoods → {}",
                snapshot.hotels.len(),
                snapshot.neighborhoods.len(),
                cli.output.display()
            );
            let config = RenderConfig::from_env(today);
            let summary = site::generate(&snapshot, &config, &cli.output)?;
            output::print_generate_output(&summary);
            println!("==> Site generated at {}", cli.output.display());
        }
    }

    Ok(())
}
