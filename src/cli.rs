/// CLI argument parsing for the startup projection settings.
use clap::Parser;

use crate::projection::{DEFAULT_DAILY_RATE_PERCENT, DEFAULT_YEARS};

#[derive(Parser)]
#[command(
    name = "rpmdash",
    version,
    about = "RPMDash - content task timers with compound projections"
)]
pub struct Cli {
    /// Projection horizon in years (floored at 1).
    #[arg(long, default_value_t = DEFAULT_YEARS)]
    pub years: u32,

    /// Daily compounding rate in percent.
    #[arg(long, default_value_t = DEFAULT_DAILY_RATE_PERCENT)]
    pub rate: f64,
}
