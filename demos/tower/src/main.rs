//! tower — command-line driver for the lift_sim elevator dispatch simulator.
//!
//! Reads a key/value config file, loads the passenger file it names (or
//! generates synthetic traffic with `--generate`), runs the simulation to
//! completion and writes `events.csv` + `passenger_data.csv` to the output
//! directory.
//!
//! ```text
//! RUST_LOG=info cargo run -p tower -- demos/tower/data/ElevatorSimConfig.csv
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;

use lift_core::SimConfig;
use lift_output::{CsvWriter, LogObserver, OutputWriter, SimOutputObserver};
use lift_sim::{DispatchBuilder, Outcomes};
use lift_traffic::{ArrivalRecord, TrafficGenerator, load_arrivals_csv, load_config_csv};

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Simulation config file (key,value rows).
    config: PathBuf,

    /// Directory that receives the output files.
    #[arg(short, long, default_value = "output")]
    out_dir: PathBuf,

    /// Generate this many groups instead of reading the passenger file.
    #[arg(short, long)]
    generate: Option<usize>,

    /// Seed for `--generate`.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Write `output.db` instead of CSV files (needs the `sqlite` feature).
    #[arg(long)]
    sqlite: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let file = load_config_csv(&args.config)
        .with_context(|| format!("reading config {}", args.config.display()))?;
    let config = file.config.clone();

    let records = match args.generate {
        Some(groups) => TrafficGenerator::new(config.num_floors, args.seed)
            .groups(groups)
            .max_group_size(config.elevator.capacity)
            .generate(),
        None => {
            let base = args.config.parent().unwrap_or(Path::new("."));
            let Some(path) = file.passenger_path(base) else {
                bail!("config has no passCSV entry; pass --generate N for synthetic traffic");
            };
            load_arrivals_csv(&path)
                .with_context(|| format!("reading passengers {}", path.display()))?
        }
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    println!("=== tower — lift_sim elevator dispatch ===");
    println!(
        "Floors: {}  |  Elevators: {}  |  Capacity: {}  |  Groups: {}",
        config.num_floors,
        config.num_elevators,
        config.elevator.capacity,
        records.len(),
    );

    if args.sqlite {
        #[cfg(feature = "sqlite")]
        {
            let writer = lift_output::SqliteWriter::new(&args.out_dir)?;
            return simulate(config, records, writer, &args.out_dir);
        }
        #[cfg(not(feature = "sqlite"))]
        bail!("--sqlite needs the binary built with `--features sqlite`");
    }

    let writer = CsvWriter::new(&args.out_dir)?;
    simulate(config, records, writer, &args.out_dir)
}

fn simulate<W: OutputWriter>(
    config:  SimConfig,
    records: Vec<ArrivalRecord>,
    writer:  W,
    out_dir: &Path,
) -> Result<()> {
    let mut engine = DispatchBuilder::new(config, records).build()?;
    let mut out = SimOutputObserver::new(writer);

    let started = Instant::now();
    let final_tick = engine.run(&mut (&mut out, LogObserver))?;
    let elapsed = started.elapsed();

    if let Some(e) = out.take_error() {
        return Err(e).context("writing simulation output");
    }

    print_summary(engine.outcomes());
    println!();
    println!("Finished at {final_tick} in {:.1} ms", elapsed.as_secs_f64() * 1e3);
    println!("Output written to {}", out_dir.display());
    Ok(())
}

fn print_summary(outcomes: &Outcomes) {
    let delivered = outcomes.successes();
    let people: u64 = delivered.iter().map(|s| s.group().size() as u64).sum();
    println!();
    println!("Delivered: {} groups ({people} people)", delivered.len());
    println!("Gave up:   {} groups", outcomes.give_ups().len());

    if delivered.is_empty() {
        return;
    }
    let n = delivered.len() as f64;
    let mean_wait = delivered.iter().map(|s| s.wait_to_board() as f64).sum::<f64>() / n;
    let mean_trip = delivered.iter().map(|s| s.total_time() as f64).sum::<f64>() / n;
    let worst = delivered.iter().map(|s| s.total_time()).max().unwrap_or(0);
    println!("Mean wait to board: {mean_wait:.1} ticks");
    println!("Mean total time:    {mean_trip:.1} ticks  (worst {worst})");
}
