//! spoilage - terminal front-end for the food spoilage detector
//! Classify readings, browse the reference dataset and replay it

mod backend;
mod display;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use spoilage_core::{DatasetNavigator, DatasetSummary, GasReading, evaluate};

use backend::Backend;

#[derive(Parser)]
#[command(name = "spoilage")]
#[command(author = "Spoilage Detector Contributors")]
#[command(version)]
#[command(about = "Food spoilage detector simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one reading and show the LED panel
    Classify {
        /// Ammonia (ppm)
        #[arg(long, default_value_t = 3.0)]
        nh3: f64,

        /// Hydrogen sulfide (ppm)
        #[arg(long, default_value_t = 0.1)]
        h2s: f64,

        /// Trimethylamine (ppm)
        #[arg(long, default_value_t = 5.0)]
        tma: f64,

        /// Dimethyl sulfide (ppm)
        #[arg(long, default_value_t = 0.5)]
        dms: f64,

        /// Send the reading through a spoilage API (e.g. http://localhost:3001)
        #[arg(short, long, value_name = "URL")]
        remote: Option<String>,
    },

    /// Step through the dataset interactively (n = next, p = previous, q = quit)
    Browse {
        /// Dataset CSV (ignored with --remote)
        #[arg(short, long, default_value = "dataset/gas_sensor_dataset.csv")]
        dataset: PathBuf,

        /// Load the dataset from and classify through a spoilage API
        #[arg(short, long, value_name = "URL")]
        remote: Option<String>,
    },

    /// Classify every dataset row and compare with its label
    Replay {
        /// Dataset CSV
        #[arg(short, long, default_value = "dataset/gas_sensor_dataset.csv")]
        dataset: PathBuf,

        /// Print one line per row
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            nh3,
            h2s,
            tma,
            dms,
            remote,
        } => classify_command(GasReading::new(nh3, h2s, tma, dms), remote.as_deref()),

        Commands::Browse { dataset, remote } => browse_command(&dataset, remote.as_deref()),

        Commands::Replay { dataset, verbose } => replay_command(&dataset, verbose),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn classify_command(reading: GasReading, remote: Option<&str>) -> Result<()> {
    let backend = Backend::new(remote);

    println!("{} with {}", "Classifying".green().bold(), backend.describe().cyan());
    println!();

    let status = backend.classify(&reading)?;
    display::print_panel(&reading, &status, &backend.thresholds());
    Ok(())
}

fn browse_command(dataset: &Path, remote: Option<&str>) -> Result<()> {
    let backend = Backend::new(remote);
    let mut navigator = DatasetNavigator::with_rows(backend.dataset(dataset)?);

    let summary = DatasetSummary::of(navigator.rows());
    println!(
        "{} {} rows ({} spoiled, {} fresh) using {}",
        "  Loaded".green().bold(),
        summary.total,
        summary.spoiled,
        summary.fresh,
        backend.describe().cyan()
    );

    if navigator.is_empty() {
        println!("{}", "Dataset is empty, nothing to browse.".yellow());
        return Ok(());
    }

    browse_loop(&mut navigator, &backend, io::stdin().lock())
}

fn browse_loop(navigator: &mut DatasetNavigator, backend: &Backend, input: impl BufRead) -> Result<()> {
    show_current(navigator, backend);

    let mut lines = input.lines();
    loop {
        print!("{} ", "[n]ext [p]revious [q]uit >".dimmed());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        match line?.trim() {
            "" | "n" | "next" => {
                navigator.next();
            }
            "p" | "prev" | "previous" => {
                navigator.previous();
            }
            "q" | "quit" | "exit" => break,
            other => {
                println!("{} unknown command '{}'", "warning:".yellow().bold(), other);
                continue;
            }
        }

        show_current(navigator, backend);
    }

    Ok(())
}

/// Prints the current row and its verdict; a failed classification is shown, not fatal
fn show_current(navigator: &DatasetNavigator, backend: &Backend) {
    let (Some(index), Some(row)) = (navigator.position(), navigator.current()) else {
        return;
    };

    println!();
    display::print_position(index, navigator.len(), row);
    match backend.classify(&row.reading) {
        Ok(status) => display::print_panel(&row.reading, &status, &backend.thresholds()),
        Err(e) => eprintln!("{} {:#}", "error:".red().bold(), e),
    }
}

fn replay_command(dataset: &Path, verbose: bool) -> Result<()> {
    let backend = Backend::new(None);
    let rows = backend.dataset(dataset)?;

    println!(
        "{} {} ({} rows)",
        "Replaying".green().bold(),
        dataset.display().to_string().cyan(),
        rows.len()
    );
    println!();

    let evaluation = evaluate(&rows, &backend.thresholds())?;
    display::print_evaluation(&evaluation, verbose);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spoilage_core::{DatasetRow, SpoilageLabel};

    fn navigator() -> DatasetNavigator {
        DatasetNavigator::with_rows(
            (0..3)
                .map(|i| DatasetRow::new(GasReading::new(i as f64, 0.1, 5.0, 0.5), SpoilageLabel::Fresh))
                .collect(),
        )
    }

    #[test]
    fn test_browse_loop_moves_cursor() {
        let mut nav = navigator();
        let input = "n\nn\np\nbogus\nq\n".as_bytes();
        browse_loop(&mut nav, &Backend::new(None), input).unwrap();
        assert_eq!(nav.position(), Some(1));
    }

    #[test]
    fn test_browse_loop_wraps_and_stops_at_quit() {
        let mut nav = navigator();
        // Enter avança; depois de "q" nada mais é lido
        let input = "p\n\nq\nn\n".as_bytes();
        browse_loop(&mut nav, &Backend::new(None), input).unwrap();
        assert_eq!(nav.position(), Some(0));
    }

    #[test]
    fn test_browse_loop_ends_on_eof() {
        let mut nav = navigator();
        browse_loop(&mut nav, &Backend::new(None), "".as_bytes()).unwrap();
        assert_eq!(nav.position(), Some(0));
    }
}
