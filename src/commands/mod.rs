//! CLI command implementations.
//!
//! - **score**: decode a vector, score it and render the assessment
//! - **factors**: print the factor catalog
//! - **init**: write a default `.riskrating.toml`

pub mod factors;
pub mod init;
pub mod score;

pub use factors::{list_factors, FactorsConfig};
pub use init::init_config;
pub use score::{handle_score, ScoreConfig};

use crate::io::{create_writer, OutputFormat, OutputWriter, RenderOptions};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where and how a command renders its result.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    pub format: OutputFormat,
    pub path: Option<PathBuf>,
    pub options: RenderOptions,
}

impl OutputTarget {
    fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
        match path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }

    /// Run `render` against a writer for this target and flush it.
    pub(crate) fn render<F>(&self, render: F) -> Result<()>
    where
        F: FnOnce(&mut dyn OutputWriter) -> Result<()>,
    {
        let sink = Self::open_sink(self.path.as_deref())?;
        let mut writer = create_writer(self.format, sink, self.options);
        render(writer.as_mut())?;
        writer.flush()?;

        if let Some(path) = &self.path {
            log::info!("Wrote {} output to {}", format_name(self.format), path.display());
        }
        Ok(())
    }
}

fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Terminal => "terminal",
        OutputFormat::Json => "json",
        OutputFormat::Yaml => "yaml",
        OutputFormat::Markdown => "markdown",
    }
}
