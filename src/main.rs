use clap::{Parser, Subcommand, ValueEnum};
use inflammation_engine::{daily_stat, patient_normalise, table, DailyStat, TableSummary};
use ndarray::{Array1, Array2};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inflammation-engine")]
#[command(version = "0.1.0")]
#[command(about = "Analyze per-patient, per-day inflammation measurements", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Stat {
    Mean,
    Max,
    Min,
}

impl Stat {
    fn label(self) -> &'static str {
        match self {
            Stat::Mean => "mean",
            Stat::Max => "max",
            Stat::Min => "min",
        }
    }
}

impl From<Stat> for DailyStat {
    fn from(stat: Stat) -> Self {
        match stat {
            Stat::Mean => DailyStat::Mean,
            Stat::Max => DailyStat::Max,
            Stat::Min => DailyStat::Min,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load and analyze a CSV measurement file
    Csv {
        /// Path to CSV file (headerless numeric rows)
        #[arg(short, long)]
        file: PathBuf,

        /// Daily statistic to print
        #[arg(short, long, value_enum)]
        stat: Option<Stat>,

        /// Print the per-patient normalised table
        #[arg(short, long)]
        normalise: bool,

        /// Print a JSON summary of all daily statistics
        #[arg(long)]
        summary: bool,
    },

    /// Load and analyze a JSON measurement file
    Json {
        /// Path to JSON file (array of arrays; null marks a missing reading)
        #[arg(short, long)]
        file: PathBuf,

        /// Daily statistic to print
        #[arg(short, long, value_enum)]
        stat: Option<Stat>,

        /// Print the per-patient normalised table
        #[arg(short, long)]
        normalise: bool,

        /// Print a JSON summary of all daily statistics
        #[arg(long)]
        summary: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Csv {
            file,
            stat,
            normalise,
            summary,
        } => {
            let table = table::load_csv(&file)?;
            analyse(&table, stat, normalise, summary)
        }
        Commands::Json {
            file,
            stat,
            normalise,
            summary,
        } => {
            let table = table::load_json(&file)?;
            analyse(&table, stat, normalise, summary)
        }
    }
}

fn analyse(
    table: &Array2<f64>,
    stat: Option<Stat>,
    normalise: bool,
    summary: bool,
) -> anyhow::Result<()> {
    println!(
        "Loaded {} patients over {} days",
        table.nrows(),
        table.ncols()
    );

    if let Some(stat) = stat {
        print_daily(stat.label(), &daily_stat(table, stat.into()));
    }

    if summary {
        let summary = TableSummary::compute(table);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if normalise {
        println!("\n=== Normalised table ===");
        let normalised = patient_normalise(table)?;
        for row in normalised.rows() {
            let cells: Vec<String> = row.iter().map(|v| format!("{:.3}", v)).collect();
            println!("{}", cells.join(","));
        }
    }

    Ok(())
}

fn print_daily(label: &str, values: &Array1<f64>) {
    println!("\n=== Daily {} ===", label);
    for (day, value) in values.iter().enumerate() {
        println!("day {:>3}: {:.2}", day, value);
    }
}
