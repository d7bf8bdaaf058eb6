//! The risk rating aggregate: one selected factor per category.
//!
//! [`RiskRating`] starts empty and is filled either through the fluent
//! [`RiskRating::with`] builder, the in-place [`RiskRating::select`], or by
//! decoding a vector string. Scoring requires all sixteen slots.
//!
//! ```rust
//! use owasp_risk_rating::factors::*;
//! use owasp_risk_rating::{Level, RiskRating};
//!
//! let score = RiskRating::new()
//!     .with(SkillLevel::AdvancedComputerUser)
//!     .with(Motive::PossibleReward)
//!     .with(Opportunity::SomeAccessOrResourcesRequired)
//!     .with(Size::AuthenticatedUsers)
//!     .with(EaseOfDiscovery::Difficult)
//!     .with(EaseOfExploit::Theoretical)
//!     .with(Awareness::Hidden)
//!     .with(IntrusionDetection::NotLogged)
//!     .with(LossOfConfidentiality::AllDataDisclosed)
//!     .with(LossOfIntegrity::ExtensiveSeriouslyCorruptData)
//!     .with(LossOfAvailability::MinimalSecondaryServicesInterrupted)
//!     .with(LossOfAccountability::CompletelyAnonymous)
//!     .with(FinancialDamage::SignificantEffectOnAnnualProfit)
//!     .with(ReputationDamage::LossOfMajorAccounts)
//!     .with(NonCompliance::HighProfileViolation)
//!     .with(PrivacyViolation::MillionsOfPeople)
//!     .calculate()
//!     .unwrap();
//!
//! assert_eq!(score.likelihood_score(), 4.875);
//! assert_eq!(score.technical_impact(), Level::High);
//! ```

use crate::errors::{RatingError, Result};
use crate::factors::*;
use crate::score::Score;
use crate::vector;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, debug_span, trace};

/// A factor enum that owns a slot in [`RiskRating`].
pub trait Selectable: Factor {
    fn slot(rating: &RiskRating) -> Option<Self>;
    fn slot_mut(rating: &mut RiskRating) -> &mut Option<Self>;
}

/// Selected factors, at most one per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskRating {
    #[serde(skip_serializing_if = "Option::is_none")]
    skill_level: Option<SkillLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    motive: Option<Motive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    opportunity: Option<Opportunity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ease_of_discovery: Option<EaseOfDiscovery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ease_of_exploit: Option<EaseOfExploit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    awareness: Option<Awareness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intrusion_detection: Option<IntrusionDetection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loss_of_confidentiality: Option<LossOfConfidentiality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loss_of_integrity: Option<LossOfIntegrity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loss_of_availability: Option<LossOfAvailability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loss_of_accountability: Option<LossOfAccountability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    financial_damage: Option<FinancialDamage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reputation_damage: Option<ReputationDamage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    non_compliance: Option<NonCompliance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    privacy_violation: Option<PrivacyViolation>,
}

/// Wires each factor enum to its field and generates the per-category
/// getters plus the category-indexed helpers.
macro_rules! rating_slots {
    ($($ty:ident => $field:ident),+ $(,)?) => {
        $(
            impl Selectable for $ty {
                fn slot(rating: &RiskRating) -> Option<Self> {
                    rating.$field
                }

                fn slot_mut(rating: &mut RiskRating) -> &mut Option<Self> {
                    &mut rating.$field
                }
            }
        )+

        impl RiskRating {
            $(
                pub fn $field(&self) -> Option<$ty> {
                    self.$field
                }
            )+

            /// Whether `category` has a selection.
            pub fn is_selected(&self, category: Category) -> bool {
                match category {
                    $(Category::$ty => self.$field.is_some(),)+
                }
            }

            /// Empty the slot for `category`.
            pub fn clear(&mut self, category: Category) -> &mut Self {
                match category {
                    $(Category::$ty => self.$field = None,)+
                }
                self
            }

            /// Declared name of the selection for `category`, if any.
            pub fn selected_name(&self, category: Category) -> Option<&'static str> {
                match category {
                    $(Category::$ty => self.$field.map(|factor| factor.name()),)+
                }
            }
        }
    };
}

rating_slots! {
    SkillLevel => skill_level,
    Motive => motive,
    Opportunity => opportunity,
    Size => size,
    EaseOfDiscovery => ease_of_discovery,
    EaseOfExploit => ease_of_exploit,
    Awareness => awareness,
    IntrusionDetection => intrusion_detection,
    LossOfConfidentiality => loss_of_confidentiality,
    LossOfIntegrity => loss_of_integrity,
    LossOfAvailability => loss_of_availability,
    LossOfAccountability => loss_of_accountability,
    FinancialDamage => financial_damage,
    ReputationDamage => reputation_damage,
    NonCompliance => non_compliance,
    PrivacyViolation => privacy_violation,
}

impl RiskRating {
    /// An empty rating with no selections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `factor`, replacing any earlier selection in its category.
    pub fn select<F: Selectable>(&mut self, factor: F) -> &mut Self {
        trace!(category = %F::CATEGORY, factor = factor.name(), "select factor");
        *F::slot_mut(self) = Some(factor);
        self
    }

    /// Builder form of [`RiskRating::select`].
    pub fn with<F: Selectable>(mut self, factor: F) -> Self {
        self.select(factor);
        self
    }

    pub fn get<F: Selectable>(&self) -> Option<F> {
        F::slot(self)
    }

    /// Categories without a selection, in vector order.
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| !self.is_selected(*category))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        Category::ALL
            .into_iter()
            .all(|category| self.is_selected(category))
    }

    /// Weights of all sixteen selections in vector order.
    pub(crate) fn weights(&self) -> Result<[u8; 16]> {
        let (
            Some(skill_level),
            Some(motive),
            Some(opportunity),
            Some(size),
            Some(ease_of_discovery),
            Some(ease_of_exploit),
            Some(awareness),
            Some(intrusion_detection),
            Some(loss_of_confidentiality),
            Some(loss_of_integrity),
            Some(loss_of_availability),
            Some(loss_of_accountability),
            Some(financial_damage),
            Some(reputation_damage),
            Some(non_compliance),
            Some(privacy_violation),
        ) = (
            self.skill_level,
            self.motive,
            self.opportunity,
            self.size,
            self.ease_of_discovery,
            self.ease_of_exploit,
            self.awareness,
            self.intrusion_detection,
            self.loss_of_confidentiality,
            self.loss_of_integrity,
            self.loss_of_availability,
            self.loss_of_accountability,
            self.financial_damage,
            self.reputation_damage,
            self.non_compliance,
            self.privacy_violation,
        )
        else {
            return Err(RatingError::missing_factor(self.missing()));
        };

        Ok([
            skill_level.likelihood(),
            motive.likelihood(),
            opportunity.likelihood(),
            size.likelihood(),
            ease_of_discovery.likelihood(),
            ease_of_exploit.likelihood(),
            awareness.likelihood(),
            intrusion_detection.likelihood(),
            loss_of_confidentiality.likelihood(),
            loss_of_integrity.likelihood(),
            loss_of_availability.likelihood(),
            loss_of_accountability.likelihood(),
            financial_damage.likelihood(),
            reputation_damage.likelihood(),
            non_compliance.likelihood(),
            privacy_violation.likelihood(),
        ])
    }

    /// Score the rating.
    ///
    /// Likelihood is the mean of the eight threat agent and vulnerability
    /// weights; each impact is the mean of its four weights. Fails with
    /// [`RatingError::MissingFactor`] naming every empty category.
    pub fn calculate(&self) -> Result<Score> {
        let _span = debug_span!("calculate").entered();

        let weights = self.weights().inspect_err(|err| {
            debug!(missing = ?err.missing_categories(), "rating incomplete");
        })?;

        let score = Score::new(
            mean(&weights[0..8]),
            mean(&weights[8..12]),
            mean(&weights[12..16]),
        );
        debug!(
            likelihood = score.likelihood_score(),
            technical_impact = score.technical_impact_score(),
            business_impact = score.business_impact_score(),
            "rating scored"
        );
        Ok(score)
    }

    /// Decode a vector string. See [`vector::decode`].
    pub fn from_vector(input: &str) -> Result<Self> {
        vector::decode(input)
    }

    /// Encode as a vector string. See [`vector::encode`].
    pub fn to_vector(&self) -> Result<String> {
        vector::encode(self)
    }
}

impl FromStr for RiskRating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self> {
        vector::decode(s)
    }
}

fn mean(weights: &[u8]) -> f64 {
    let sum: u32 = weights.iter().map(|&w| u32::from(w)).sum();
    f64::from(sum) / weights.len() as f64
}
