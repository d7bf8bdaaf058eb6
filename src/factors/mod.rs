//! Factor catalog for the OWASP Risk Rating methodology.
//!
//! Sixteen closed factor categories, grouped the way the methodology groups
//! them:
//!
//! - **Threat Agent**: [`SkillLevel`], [`Motive`], [`Opportunity`], [`Size`]
//! - **Vulnerability**: [`EaseOfDiscovery`], [`EaseOfExploit`], [`Awareness`],
//!   [`IntrusionDetection`]
//! - **Technical Impact**: [`LossOfConfidentiality`], [`LossOfIntegrity`],
//!   [`LossOfAvailability`], [`LossOfAccountability`]
//! - **Business Impact**: [`FinancialDamage`], [`ReputationDamage`],
//!   [`NonCompliance`], [`PrivacyViolation`]
//!
//! Each enumerant carries a fixed likelihood weight in `0..=9`. Weights are
//! not unique within a category, so reverse lookups resolve to the first
//! declared enumerant.
//!
//! # Example
//!
//! ```rust
//! use owasp_risk_rating::factors::{Factor, Size};
//!
//! assert_eq!(Size::Partners.likelihood(), 5);
//! assert_eq!(Size::from_likelihood(2).unwrap(), Size::Developers);
//! assert_eq!("INTRANET_USERS".parse::<Size>().unwrap(), Size::IntranetUsers);
//! ```

use crate::errors::UnknownFactor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares one factor category as a closed enum implementing [`Factor`].
///
/// Variants are listed as `Variant = ("DECLARED_NAME", weight)` in catalog
/// order. The category variant of [`Category`] must share the enum's name.
macro_rules! factor_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident = ($label:literal, $weight:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $crate::factors::Factor for $name {
            const CATEGORY: $crate::factors::Category = $crate::factors::Category::$name;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn likelihood(self) -> u8 {
                match self {
                    $($name::$variant => $weight),+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::factors::Factor::name(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::UnknownFactor;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::factors::Factor>::from_name(s)
            }
        }
    };
}

mod business_impact;
mod technical_impact;
mod threat_agent;
mod vulnerability;

pub use business_impact::{FinancialDamage, NonCompliance, PrivacyViolation, ReputationDamage};
pub use technical_impact::{
    LossOfAccountability, LossOfAvailability, LossOfConfidentiality, LossOfIntegrity,
};
pub use threat_agent::{Motive, Opportunity, Size, SkillLevel};
pub use vulnerability::{Awareness, EaseOfDiscovery, EaseOfExploit, IntrusionDetection};

/// The four factor groups of the methodology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorGroup {
    ThreatAgent,
    Vulnerability,
    TechnicalImpact,
    BusinessImpact,
}

impl FactorGroup {
    pub fn name(self) -> &'static str {
        match self {
            Self::ThreatAgent => "Threat Agent",
            Self::Vulnerability => "Vulnerability",
            Self::TechnicalImpact => "Technical Impact",
            Self::BusinessImpact => "Business Impact",
        }
    }
}

impl fmt::Display for FactorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the sixteen factor categories.
///
/// Declaration order is the vector order (`SL, M, O, S, ED, EE, A, ID, LC,
/// LI, LAV, LAC, FD, RD, NC, PV`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SkillLevel,
    Motive,
    Opportunity,
    Size,
    EaseOfDiscovery,
    EaseOfExploit,
    Awareness,
    IntrusionDetection,
    LossOfConfidentiality,
    LossOfIntegrity,
    LossOfAvailability,
    LossOfAccountability,
    FinancialDamage,
    ReputationDamage,
    NonCompliance,
    PrivacyViolation,
}

impl Category {
    /// All categories in vector order.
    pub const ALL: [Category; 16] = [
        Category::SkillLevel,
        Category::Motive,
        Category::Opportunity,
        Category::Size,
        Category::EaseOfDiscovery,
        Category::EaseOfExploit,
        Category::Awareness,
        Category::IntrusionDetection,
        Category::LossOfConfidentiality,
        Category::LossOfIntegrity,
        Category::LossOfAvailability,
        Category::LossOfAccountability,
        Category::FinancialDamage,
        Category::ReputationDamage,
        Category::NonCompliance,
        Category::PrivacyViolation,
    ];

    /// Abbreviation used as the field key in a vector string.
    pub const fn code(self) -> &'static str {
        match self {
            Self::SkillLevel => "SL",
            Self::Motive => "M",
            Self::Opportunity => "O",
            Self::Size => "S",
            Self::EaseOfDiscovery => "ED",
            Self::EaseOfExploit => "EE",
            Self::Awareness => "A",
            Self::IntrusionDetection => "ID",
            Self::LossOfConfidentiality => "LC",
            Self::LossOfIntegrity => "LI",
            Self::LossOfAvailability => "LAV",
            Self::LossOfAccountability => "LAC",
            Self::FinancialDamage => "FD",
            Self::ReputationDamage => "RD",
            Self::NonCompliance => "NC",
            Self::PrivacyViolation => "PV",
        }
    }

    /// Human-readable label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SkillLevel => "Skill Level",
            Self::Motive => "Motive",
            Self::Opportunity => "Opportunity",
            Self::Size => "Size",
            Self::EaseOfDiscovery => "Ease of Discovery",
            Self::EaseOfExploit => "Ease of Exploit",
            Self::Awareness => "Awareness",
            Self::IntrusionDetection => "Intrusion Detection",
            Self::LossOfConfidentiality => "Loss of Confidentiality",
            Self::LossOfIntegrity => "Loss of Integrity",
            Self::LossOfAvailability => "Loss of Availability",
            Self::LossOfAccountability => "Loss of Accountability",
            Self::FinancialDamage => "Financial Damage",
            Self::ReputationDamage => "Reputation Damage",
            Self::NonCompliance => "Non-Compliance",
            Self::PrivacyViolation => "Privacy Violation",
        }
    }

    pub const fn group(self) -> FactorGroup {
        match self {
            Self::SkillLevel | Self::Motive | Self::Opportunity | Self::Size => {
                FactorGroup::ThreatAgent
            }
            Self::EaseOfDiscovery
            | Self::EaseOfExploit
            | Self::Awareness
            | Self::IntrusionDetection => FactorGroup::Vulnerability,
            Self::LossOfConfidentiality
            | Self::LossOfIntegrity
            | Self::LossOfAvailability
            | Self::LossOfAccountability => FactorGroup::TechnicalImpact,
            Self::FinancialDamage
            | Self::ReputationDamage
            | Self::NonCompliance
            | Self::PrivacyViolation => FactorGroup::BusinessImpact,
        }
    }

    /// Look up a category by its vector code (case-sensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Behaviour shared by every factor enum.
pub trait Factor: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Category this factor belongs to.
    const CATEGORY: Category;

    /// Every enumerant in catalog declaration order.
    fn all() -> &'static [Self];

    /// Likelihood weight in `0..=9`.
    fn likelihood(self) -> u8;

    /// Declared name, e.g. `NO_TECHNICAL_SKILLS`.
    fn name(self) -> &'static str;

    /// First enumerant (in declaration order) carrying `weight`.
    fn from_likelihood(weight: u8) -> Result<Self, UnknownFactor> {
        Self::all()
            .iter()
            .copied()
            .find(|factor| factor.likelihood() == weight)
            .ok_or_else(|| UnknownFactor::new(Self::CATEGORY, weight.to_string()))
    }

    /// Parse a numeric weight such as `"7"` or `"7.0"` and resolve it with
    /// [`Factor::from_likelihood`].
    fn from_likelihood_str(value: &str) -> Result<Self, UnknownFactor> {
        let unknown = || UnknownFactor::new(Self::CATEGORY, value);
        let parsed: f64 = value.trim().parse().map_err(|_| unknown())?;
        if parsed.fract() != 0.0 || !(0.0..=9.0).contains(&parsed) {
            return Err(unknown());
        }
        Self::from_likelihood(parsed as u8)
    }

    /// Exact match on the declared name.
    fn from_name(name: &str) -> Result<Self, UnknownFactor> {
        Self::all()
            .iter()
            .copied()
            .find(|factor| factor.name() == name)
            .ok_or_else(|| UnknownFactor::new(Self::CATEGORY, name))
    }
}

/// A single catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub category: Category,
    pub name: &'static str,
    pub likelihood: u8,
}

fn entries_of<F: Factor>() -> Vec<CatalogEntry> {
    F::all()
        .iter()
        .map(|factor| CatalogEntry {
            category: F::CATEGORY,
            name: factor.name(),
            likelihood: factor.likelihood(),
        })
        .collect()
}

/// Catalog rows for one category in declaration order.
pub fn entries_for(category: Category) -> Vec<CatalogEntry> {
    match category {
        Category::SkillLevel => entries_of::<SkillLevel>(),
        Category::Motive => entries_of::<Motive>(),
        Category::Opportunity => entries_of::<Opportunity>(),
        Category::Size => entries_of::<Size>(),
        Category::EaseOfDiscovery => entries_of::<EaseOfDiscovery>(),
        Category::EaseOfExploit => entries_of::<EaseOfExploit>(),
        Category::Awareness => entries_of::<Awareness>(),
        Category::IntrusionDetection => entries_of::<IntrusionDetection>(),
        Category::LossOfConfidentiality => entries_of::<LossOfConfidentiality>(),
        Category::LossOfIntegrity => entries_of::<LossOfIntegrity>(),
        Category::LossOfAvailability => entries_of::<LossOfAvailability>(),
        Category::LossOfAccountability => entries_of::<LossOfAccountability>(),
        Category::FinancialDamage => entries_of::<FinancialDamage>(),
        Category::ReputationDamage => entries_of::<ReputationDamage>(),
        Category::NonCompliance => entries_of::<NonCompliance>(),
        Category::PrivacyViolation => entries_of::<PrivacyViolation>(),
    }
}

/// The whole catalog, category by category in vector order.
pub fn catalog() -> Vec<CatalogEntry> {
    Category::ALL.into_iter().flat_map(entries_for).collect()
}
