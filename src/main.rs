use clap::{Parser, Subcommand, ValueEnum};
use ratiopad::imaging::Placement;
use ratiopad::{classify, config, output, pipeline};
use std::path::PathBuf;

/// Flags controlling how the pad batch runs.
#[derive(clap::Args)]
struct PadArgs {
    /// Directory of photos to pad
    dir: PathBuf,

    /// Where the source sits inside the padded canvas
    #[arg(long, value_enum, default_value = "centered")]
    placement: PlacementArg,

    /// Maximum parallel workers (values above the core count are clamped)
    #[arg(long)]
    jobs: Option<usize>,

    /// Write a JSON report of per-file results to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy)]
enum PlacementArg {
    /// Bars split evenly around the photo
    Centered,
    /// Photo pinned to the top-left, bars on the trailing edges
    Edge,
}

impl From<PlacementArg> for Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Centered => Placement::Centered,
            PlacementArg::Edge => Placement::EdgeAnchored,
        }
    }
}

#[derive(Parser)]
#[command(name = "ratiopad")]
#[command(about = "Letterbox photo directories to standard delivery ratios")]
#[command(long_about = "\
Letterbox photo directories to standard delivery ratios

Each photo is classified to the nearest standard ratio (16x9, 3x2, 4x3,
5x4, 3x3), rotated to landscape if needed, padded with solid bars where
a rule applies, and resized to an 1800x1200 delivery copy written next
to the original:

  shoot/
  ├── wide.jpg          # 3840x2160 (16x9) → 3x2.wide.jpg    (black bars)
  ├── square.png        # 1000x1000 (3x3)  → 3x2.square.png  (white bars)
  ├── classic.jpg       # 4000x3000 (4x3)  → 4x3.classic.jpg (resize only)
  └── tall.jpg          # rotated to landscape before classification

Originals are never modified. Failures are reported per file and never
stop the batch.

Run 'ratiopad classify DIR' to preview ratio buckets without writing.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pad and resize every photo in a directory
    Pad(PadArgs),
    /// Print each photo's nearest standard ratio as a shell mv suggestion
    Classify {
        /// Directory of photos to classify
        dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Pad(args) => {
            let mut pad_config = config::PadConfig::with_placement(args.placement.into())?;
            pad_config.threads = args.jobs;
            init_thread_pool(&pad_config);

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_job_event(&event);
                }
            });
            let results = pipeline::run(&args.dir, &pad_config, Some(tx))?;
            printer.join().unwrap();

            output::print_summary(&results);

            if let Some(report_path) = args.report {
                let json = serde_json::to_string_pretty(&results)?;
                std::fs::write(&report_path, json)?;
            }
        }
        Command::Classify { dir } => {
            for result in classify::classify_directory(&dir)? {
                output::print_classify_result(&result);
            }
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool from the resolved config.
///
/// Caps at the available core count; users can constrain down, not up.
fn init_thread_pool(pad_config: &config::PadConfig) {
    let threads = config::effective_threads(pad_config);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
