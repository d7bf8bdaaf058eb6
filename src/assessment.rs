//! A scored rating bundled for rendering.

use crate::errors::Result;
use crate::factors::{Category, FactorGroup};
use crate::rating::RiskRating;
use crate::score::{Level, Score};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScore {
    pub score: f64,
    pub level: Level,
}

impl SubScore {
    fn new(score: f64) -> Self {
        Self {
            score,
            level: Level::from_score(score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub likelihood: SubScore,
    pub technical_impact: SubScore,
    pub business_impact: SubScore,
}

impl From<Score> for ScoreSummary {
    fn from(score: Score) -> Self {
        Self {
            likelihood: SubScore::new(score.likelihood_score()),
            technical_impact: SubScore::new(score.technical_impact_score()),
            business_impact: SubScore::new(score.business_impact_score()),
        }
    }
}

/// One selected factor as shown in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFactor {
    pub group: FactorGroup,
    pub category: Category,
    pub code: &'static str,
    pub factor: &'static str,
}

/// Canonical vector, selections and scores of one complete rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub vector: String,
    pub factors: Vec<SelectedFactor>,
    pub scores: ScoreSummary,
}

impl Assessment {
    /// Score `rating`. Fails with `MissingFactor` if it is incomplete.
    pub fn new(rating: &RiskRating) -> Result<Self> {
        let score = rating.calculate()?;
        let vector = rating.to_vector()?;
        let factors = Category::ALL
            .into_iter()
            .filter_map(|category| {
                rating.selected_name(category).map(|factor| SelectedFactor {
                    group: category.group(),
                    category,
                    code: category.code(),
                    factor,
                })
            })
            .collect();

        Ok(Self {
            vector,
            factors,
            scores: score.into(),
        })
    }

    pub fn from_vector(input: &str) -> Result<Self> {
        Self::new(&RiskRating::from_vector(input)?)
    }
}
