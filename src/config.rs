//! Command-line configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::types::{MotionPolicy, DEFAULT_STEP_PERCENT};

/// Klondike solitaire in the terminal, played with the mouse.
#[derive(Debug, Clone, Parser)]
#[command(name = "tui-solitaire", version, about)]
pub struct Cli {
    /// Deal seed; a time-based seed is used when omitted.
    #[arg(long)]
    pub seed: Option<u32>,

    /// How dropped cards travel to their destination.
    #[arg(long, value_enum, default_value_t = MotionArg::FixedStep)]
    pub motion: MotionArg,

    /// Percentage of the distance covered per tick by fixed-step motion.
    #[arg(long, default_value_t = DEFAULT_STEP_PERCENT, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub step_percent: u8,

    /// Append log records to this file. Nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Most verbose level written to the log file.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MotionArg {
    Instant,
    FixedStep,
    UnitStep,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: u32,
    pub motion: MotionPolicy,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Cli {
    /// Resolve defaults; `fallback_seed` is used when `--seed` is absent.
    pub fn into_config(self, fallback_seed: u32) -> Config {
        let motion = match self.motion {
            MotionArg::Instant => MotionPolicy::Instant,
            MotionArg::FixedStep => MotionPolicy::FixedStep {
                percent: self.step_percent,
            },
            MotionArg::UnitStep => MotionPolicy::UnitStep,
        };
        Config {
            seed: self.seed.unwrap_or(fallback_seed),
            motion,
            log_file: self.log_file,
            log_level: self.log_level,
        }
    }
}

impl Config {
    /// Parse the process arguments, exiting with usage on error.
    pub fn from_args() -> Self {
        Cli::parse().into_config(time_seed())
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
