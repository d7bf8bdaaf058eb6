pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter, RenderOptions};

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Read the first line of `reader`, without its line terminator.
pub fn read_first_line(mut reader: impl Read) -> Result<String> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .context("Failed to read input")?;
    Ok(contents.lines().next().unwrap_or_default().to_string())
}
