use crate::formatting::ColorMode;
use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "riskrating")]
#[command(about = "OWASP Risk Rating calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show info messages
    /// -vv: Show debug messages
    /// -vvv: Show trace messages
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// When to color terminal output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Plain output: no colors
    #[arg(long, global = true, env = "RISKRATING_PLAIN")]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a rating given as a vector string
    Score {
        /// Rating vector, e.g. SL:1/M:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3
        /// Use "-" to read it from stdin
        vector: String,

        /// Hide the per-category factor listing
        #[arg(long = "no-factors")]
        no_factors: bool,

        /// Digits after the decimal point for sub-scores
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
        precision: Option<u8>,
    },

    /// List the factor catalog
    Factors {
        /// Only list one category, by vector code (e.g. SL, LAV)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Initialize a .riskrating.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Default tracing filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Effective color mode: `--plain` wins over `--color`, which wins over config.
    pub fn color_mode(&self, configured: ColorMode) -> ColorMode {
        if self.plain {
            ColorMode::Never
        } else {
            self.color.unwrap_or(configured)
        }
    }
}
