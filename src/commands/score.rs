use super::OutputTarget;
use crate::assessment::Assessment;
use crate::io::read_first_line;
use anyhow::Result;
use std::io::Read;

#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Rating vector, or `-` to read one line from stdin
    pub vector: String,
    pub target: OutputTarget,
}

pub fn handle_score(config: ScoreConfig) -> Result<()> {
    let input = resolve_vector(&config.vector, std::io::stdin().lock())?;
    let assessment = assess(&input)?;
    config
        .target
        .render(|writer| writer.write_assessment(&assessment))
}

fn resolve_vector(argument: &str, stdin: impl Read) -> Result<String> {
    if argument == "-" {
        log::debug!("Reading vector from stdin");
        read_first_line(stdin)
    } else {
        Ok(argument.to_string())
    }
}

fn assess(input: &str) -> Result<Assessment> {
    let span = tracing::info_span!("score", vector = input);
    let _enter = span.enter();

    let assessment = Assessment::from_vector(input.trim())?;
    tracing::info!(
        likelihood = assessment.scores.likelihood.score,
        technical_impact = assessment.scores.technical_impact.score,
        business_impact = assessment.scores.business_impact.score,
        "Scored rating"
    );
    Ok(assessment)
}
