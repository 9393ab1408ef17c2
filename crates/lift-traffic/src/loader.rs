//! CSV loaders for the simulation config file and passenger files.
//!
//! # Config format
//!
//! One `key,value` pair per row, no header:
//!
//! ```csv
//! numFloors,6
//! numElevators,1
//! passCSV,morning_rush.csv
//! capacity,15
//! floorTicks,5
//! doorTicks,2
//! passPerTick,3
//! ```
//!
//! `maxTicks` and `snapshotInterval` are also understood.  Missing keys keep
//! their [`SimConfig::default`] values; unknown keys are logged and skipped.
//!
//! # Passenger format
//!
//! One header row, then one row per group:
//!
//! ```csv
//! time,numPass,fromFloor,toFloor,polite,wait
//! 0,4,1,3,TRUE,1000
//! 12,2,5,1,FALSE,200
//! 20,3,2,6
//! ```
//!
//! Floors are one-based.  `polite` is true unless the field is present and
//! is not `TRUE` (any case); `wait` defaults to
//! [`ArrivalRecord::DEFAULT_PATIENCE`].

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use lift_core::{SimConfig, Tick};

use crate::{ArrivalRecord, TrafficError, TrafficResult};

// ── Config file ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ConfigRow {
    key:   String,
    value: String,
}

/// A parsed simulation config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub config: SimConfig,

    /// The `passCSV` entry, as written in the file.
    pub passenger_file: Option<String>,
}

impl ConfigFile {
    /// Resolve the passenger file relative to `base_dir` (normally the
    /// directory holding the config file).  Absolute paths are kept as-is.
    pub fn passenger_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.passenger_file.as_ref().map(|f| base_dir.join(f))
    }
}

/// Load and validate a simulation config file.
pub fn load_config_csv(path: &Path) -> TrafficResult<ConfigFile> {
    let file = std::fs::File::open(path)?;
    load_config_reader(file)
}

/// Like [`load_config_csv`] but accepts any `Read` source.
pub fn load_config_reader<R: Read>(reader: R) -> TrafficResult<ConfigFile> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut parsed = ConfigFile::default();
    let cfg = &mut parsed.config;

    for result in csv_reader.records() {
        let record = result?;
        let line = line_of(&record);
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row: ConfigRow = record
            .deserialize(None)
            .map_err(|e| TrafficError::Parse { line, reason: e.to_string() })?;

        match row.key.as_str() {
            "numFloors"        => cfg.num_floors = parse_num(&row, line)?,
            "numElevators"     => cfg.num_elevators = parse_num(&row, line)?,
            "passCSV"          => parsed.passenger_file = Some(row.value),
            "capacity"         => cfg.elevator.capacity = parse_num(&row, line)?,
            "floorTicks"       => cfg.elevator.ticks_per_floor = parse_num(&row, line)?,
            "doorTicks"        => cfg.elevator.ticks_per_door = parse_num(&row, line)?,
            "passPerTick"      => cfg.elevator.people_per_tick = parse_num(&row, line)?,
            "maxTicks"         => cfg.max_ticks = parse_num(&row, line)?,
            "snapshotInterval" => cfg.snapshot_interval_ticks = parse_num(&row, line)?,
            other => log::warn!("config line {line}: ignoring unknown key {other:?}"),
        }
    }

    parsed.config.validate()?;
    log::debug!("loaded config: {:?}", parsed.config);
    Ok(parsed)
}

// ── Passenger file ────────────────────────────────────────────────────────────

/// Load arrival records from a passenger CSV file.
pub fn load_arrivals_csv(path: &Path) -> TrafficResult<Vec<ArrivalRecord>> {
    let file = std::fs::File::open(path)?;
    load_arrivals_reader(file)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenarios.
pub fn load_arrivals_reader<R: Read>(reader: R) -> TrafficResult<Vec<ArrivalRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        records.push(parse_arrival(&record)?);
    }
    log::debug!("loaded {} arrival records", records.len());
    Ok(records)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn parse_num<T: std::str::FromStr>(row: &ConfigRow, line: u64) -> TrafficResult<T> {
    row.value.parse().map_err(|_| TrafficError::Parse {
        line,
        reason: format!("{} expects a non-negative integer, got {:?}", row.key, row.value),
    })
}

fn parse_arrival(record: &StringRecord) -> TrafficResult<ArrivalRecord> {
    let line = line_of(record);
    if record.len() < 4 {
        return Err(TrafficError::Parse {
            line,
            reason: format!(
                "expected at least 4 fields (time,numPass,fromFloor,toFloor), got {}",
                record.len()
            ),
        });
    }

    let field = |i: usize, name: &str| -> TrafficResult<u64> {
        let raw = &record[i];
        raw.parse::<u64>().map_err(|_| TrafficError::Parse {
            line,
            reason: format!("{name} must be a non-negative integer, got {raw:?}"),
        })
    };
    let narrow = |v: u64, name: &str| -> TrafficResult<u16> {
        u16::try_from(v).map_err(|_| TrafficError::Parse {
            line,
            reason: format!("{name} {v} is out of range"),
        })
    };

    let tick        = Tick(field(0, "time")?);
    let size        = u32::try_from(field(1, "numPass")?).map_err(|_| TrafficError::Parse {
        line,
        reason: "numPass is out of range".into(),
    })?;
    let origin      = narrow(field(2, "fromFloor")?, "fromFloor")?;
    let destination = narrow(field(3, "toFloor")?, "toFloor")?;
    let polite      = record
        .get(4)
        .filter(|s| !s.is_empty())
        .is_none_or(|s| s.eq_ignore_ascii_case("true"));
    let patience    = match record.get(5).filter(|s| !s.is_empty()) {
        Some(_) => field(5, "wait")?,
        None    => ArrivalRecord::DEFAULT_PATIENCE,
    };

    Ok(ArrivalRecord { tick, size, origin, destination, polite, patience })
}
