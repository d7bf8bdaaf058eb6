use anyhow::Result;
use clap::Parser;
use owasp_risk_rating::cli::{Cli, Commands};
use owasp_risk_rating::commands::{self, FactorsConfig, OutputTarget, ScoreConfig};
use owasp_risk_rating::config::{self, RiskRatingConfig};
use owasp_risk_rating::formatting::Palette;
use owasp_risk_rating::io::RenderOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match cli.command {
        Commands::Init { force } => commands::init_config(force),
        Commands::Score {
            ref vector,
            no_factors,
            precision,
        } => {
            let config = config::load_config();
            let mut target = build_output_target(&cli, &config);
            if no_factors {
                target.options.show_factors = false;
            }
            if let Some(precision) = precision {
                target.options.precision = usize::from(precision);
            }
            commands::handle_score(ScoreConfig {
                vector: vector.clone(),
                target,
            })
        }
        Commands::Factors { ref category } => {
            let config = config::load_config();
            commands::list_factors(FactorsConfig {
                category: category.clone(),
                target: build_output_target(&cli, &config),
            })
        }
    }
}

// Logs go to stderr, stdout carries rendered output only
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}

// Pure function: command-line flags layered over the loaded configuration
fn build_output_target(cli: &Cli, config: &RiskRatingConfig) -> OutputTarget {
    let output = &config.output;
    let color = cli.color_mode(output.color.with_env_overrides());
    // No colors when writing to a file
    let palette = if cli.output.is_none() {
        Palette::new(color)
    } else {
        Palette::plain()
    };

    OutputTarget {
        format: cli.format.unwrap_or(output.default_format),
        path: cli.output.clone(),
        options: RenderOptions {
            show_factors: output.show_factors,
            precision: output.precision,
            palette,
        },
    }
}
