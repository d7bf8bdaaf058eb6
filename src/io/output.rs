use crate::assessment::{Assessment, SubScore};
use crate::factors::CatalogEntry;
use crate::formatting::Palette;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Yaml,
    Markdown,
}

/// Presentation knobs shared by every writer.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_factors: bool,
    /// Digits after the decimal point for sub-scores.
    pub precision: usize,
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_factors: true,
            precision: 3,
            palette: Palette::plain(),
        }
    }
}

pub trait OutputWriter {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()>;
    fn write_catalog(&mut self, entries: &[CatalogEntry]) -> anyhow::Result<()>;
    fn flush(&mut self) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(assessment)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_catalog(&mut self, entries: &[CatalogEntry]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct YamlWriter<W: Write> {
    writer: W,
}

impl<W: Write> YamlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for YamlWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(assessment)?;
        self.writer.write_all(yaml.as_bytes())?;
        Ok(())
    }

    fn write_catalog(&mut self, entries: &[CatalogEntry]) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(entries)?;
        self.writer.write_all(yaml.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    options: RenderOptions,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self { writer, options }
    }

    fn write_score_row(&mut self, label: &str, sub: &SubScore) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "| {} | {:.*} | {} |",
            label, self.options.precision, sub.score, sub.level
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        writeln!(self.writer, "# OWASP Risk Rating")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Vector: `{}`", assessment.vector)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Score | Value | Level |")?;
        writeln!(self.writer, "|-------|-------|-------|")?;
        self.write_score_row("Likelihood", &assessment.scores.likelihood)?;
        self.write_score_row("Technical Impact", &assessment.scores.technical_impact)?;
        self.write_score_row("Business Impact", &assessment.scores.business_impact)?;

        if self.options.show_factors {
            writeln!(self.writer)?;
            writeln!(self.writer, "## Factors")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Group | Factor | Code | Selection |")?;
            writeln!(self.writer, "|-------|--------|------|-----------|")?;
            for selected in &assessment.factors {
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {} |",
                    selected.group, selected.category, selected.code, selected.factor
                )?;
            }
        }
        Ok(())
    }

    fn write_catalog(&mut self, entries: &[CatalogEntry]) -> anyhow::Result<()> {
        writeln!(self.writer, "| Factor | Code | Name | Likelihood |")?;
        writeln!(self.writer, "|--------|------|------|------------|")?;
        for entry in entries {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                entry.category,
                entry.category.code(),
                entry.name,
                entry.likelihood
            )?;
        }
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    options: RenderOptions,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self { writer, options }
    }

    fn write_score_line(&mut self, label: &str, sub: &SubScore) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "  {:<18} {:>6.*}  {}",
            label,
            self.options.precision,
            sub.score,
            self.options.palette.level(sub.level)
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        let palette = self.options.palette;
        writeln!(self.writer, "{}", palette.header("OWASP Risk Rating"))?;
        writeln!(self.writer, "  {}", palette.dim(&assessment.vector))?;
        writeln!(self.writer)?;

        if self.options.show_factors {
            let mut current_group = None;
            for selected in &assessment.factors {
                if current_group != Some(selected.group) {
                    writeln!(self.writer, "{}:", palette.header(selected.group.name()))?;
                    current_group = Some(selected.group);
                }
                writeln!(
                    self.writer,
                    "  {:<24} {:<4} {}",
                    selected.category.name(),
                    selected.code,
                    selected.factor
                )?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "{}:", palette.header("Scores"))?;
        self.write_score_line("Likelihood", &assessment.scores.likelihood)?;
        self.write_score_line("Technical Impact", &assessment.scores.technical_impact)?;
        self.write_score_line("Business Impact", &assessment.scores.business_impact)?;
        Ok(())
    }

    fn write_catalog(&mut self, entries: &[CatalogEntry]) -> anyhow::Result<()> {
        let palette = self.options.palette;
        let mut current = None;
        for entry in entries {
            if current != Some(entry.category) {
                if current.is_some() {
                    writeln!(self.writer)?;
                }
                let title = format!("{} ({})", entry.category.name(), entry.category.code());
                writeln!(self.writer, "{}", palette.header(&title))?;
                current = Some(entry.category);
            }
            writeln!(self.writer, "  {}  {}", entry.likelihood, entry.name)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    sink: Box<dyn Write + 'a>,
    options: RenderOptions,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Yaml => Box::new(YamlWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink, options)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, options)),
    }
}
