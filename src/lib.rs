//! OWASP Risk Rating: factor catalog, scoring and the compact vector notation.
//!
//! ```
//! use owasp_risk_rating::{Level, RiskRating};
//!
//! let rating: RiskRating =
//!     "SL:1/M:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3"
//!         .parse()
//!         .unwrap();
//! let score = rating.calculate().unwrap();
//! assert_eq!(score.technical_impact_score(), 1.25);
//! assert_eq!(score.likelihood(), Level::Low);
//! ```

pub mod assessment;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod factors;
pub mod formatting;
pub mod io;
pub mod rating;
pub mod score;
pub mod vector;

// Re-export commonly used types
pub use crate::assessment::Assessment;
pub use crate::errors::{RatingError, Result, UnknownFactor};
pub use crate::factors::{
    Awareness, Category, EaseOfDiscovery, EaseOfExploit, Factor, FactorGroup,
    FinancialDamage, IntrusionDetection, LossOfAccountability, LossOfAvailability,
    LossOfConfidentiality, LossOfIntegrity, Motive, NonCompliance, Opportunity,
    PrivacyViolation, ReputationDamage, Size, SkillLevel,
};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::rating::{RiskRating, Selectable};
pub use crate::score::{Level, Score};
pub use crate::vector::{decode, encode, VECTOR_PATTERN};
