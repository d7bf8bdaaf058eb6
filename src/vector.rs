//! Vector string codec.
//!
//! A vector encodes all sixteen selections as `CODE:weight` pairs in a fixed
//! order, separated by `/`:
//!
//! ```text
//! SL:1/M:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3
//! ```
//!
//! The digit is the enumerant's weight, not its position. Decoding maps a
//! weight shared by two enumerants to the first declared one, so
//! `decode(encode(r))` can return a different (equally weighted) enumerant
//! than `r` held.

use crate::errors::{RatingError, Result};
use crate::factors::*;
use crate::rating::{RiskRating, Selectable};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, debug_span};

/// Grammar accepted by [`decode`], as shown in error messages.
pub const VECTOR_PATTERN: &str = r"SL:\d/M:\d/O:\d/S:\d/ED:\d/EE:\d/A:\d/ID:\d/LC:\d/LI:\d/LAV:\d/LAC:\d/FD:\d/RD:\d/NC:\d/PV:\d";

// `\d` in the regex crate matches any Unicode digit; the wire format is ASCII only.
static VECTOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    let fields: Vec<String> = Category::ALL
        .iter()
        .map(|category| format!("{}:([0-9])", category.code()))
        .collect();
    Regex::new(&format!("^{}$", fields.join("/"))).expect("vector grammar is a valid regex")
});

/// Parse a vector string into a fully populated [`RiskRating`].
///
/// Fails with [`RatingError::InvalidVector`] when the input is empty, does
/// not match [`VECTOR_PATTERN`] exactly, or carries a weight that no
/// enumerant of its category has.
pub fn decode(input: &str) -> Result<RiskRating> {
    let _span = debug_span!("decode_vector", len = input.len()).entered();

    if input.is_empty() {
        return Err(RatingError::invalid_vector(input, "vector is empty"));
    }

    let captures = VECTOR_REGEX.captures(input).ok_or_else(|| {
        debug!("vector rejected by grammar");
        RatingError::invalid_vector(input, "vector does not match the expected grammar")
    })?;

    let mut weights = [0u8; 16];
    for (slot, group) in weights.iter_mut().zip(captures.iter().skip(1)) {
        let digit = group.map(|m| m.as_str().as_bytes()).unwrap_or_default();
        *slot = match digit {
            [d] => d - b'0',
            _ => return Err(RatingError::invalid_vector(input, "missing field value")),
        };
    }

    let mut rating = RiskRating::new();
    select_weight::<SkillLevel>(&mut rating, input, weights[0])?;
    select_weight::<Motive>(&mut rating, input, weights[1])?;
    select_weight::<Opportunity>(&mut rating, input, weights[2])?;
    select_weight::<Size>(&mut rating, input, weights[3])?;
    select_weight::<EaseOfDiscovery>(&mut rating, input, weights[4])?;
    select_weight::<EaseOfExploit>(&mut rating, input, weights[5])?;
    select_weight::<Awareness>(&mut rating, input, weights[6])?;
    select_weight::<IntrusionDetection>(&mut rating, input, weights[7])?;
    select_weight::<LossOfConfidentiality>(&mut rating, input, weights[8])?;
    select_weight::<LossOfIntegrity>(&mut rating, input, weights[9])?;
    select_weight::<LossOfAvailability>(&mut rating, input, weights[10])?;
    select_weight::<LossOfAccountability>(&mut rating, input, weights[11])?;
    select_weight::<FinancialDamage>(&mut rating, input, weights[12])?;
    select_weight::<ReputationDamage>(&mut rating, input, weights[13])?;
    select_weight::<NonCompliance>(&mut rating, input, weights[14])?;
    select_weight::<PrivacyViolation>(&mut rating, input, weights[15])?;

    debug!("vector decoded");
    Ok(rating)
}

fn select_weight<F: Selectable>(rating: &mut RiskRating, input: &str, weight: u8) -> Result<()> {
    let factor = F::from_likelihood(weight).map_err(|err| {
        debug!(category = %F::CATEGORY, weight, "no enumerant for weight");
        let reason = format!(
            "{} ({}) has no factor with weight {}",
            err.category(),
            F::CATEGORY.code(),
            err.value()
        );
        RatingError::invalid_vector(input, reason)
    })?;
    rating.select(factor);
    Ok(())
}

/// Render a complete rating as its canonical vector string.
///
/// Fails with [`RatingError::MissingFactor`] if any category is empty.
pub fn encode(rating: &RiskRating) -> Result<String> {
    let weights = rating.weights()?;
    let fields: Vec<String> = Category::ALL
        .iter()
        .zip(weights)
        .map(|(category, weight)| format!("{}:{}", category.code(), weight))
        .collect();
    Ok(fields.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Level;

    const REFERENCE: &str =
        "SL:1/M:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3";

    #[test]
    fn decodes_reference_vector() {
        let rating = decode(REFERENCE).unwrap();

        assert_eq!(rating.skill_level(), Some(SkillLevel::NoTechnicalSkills));
        assert_eq!(rating.motive(), Some(Motive::LowOrNoReward));
        assert_eq!(
            rating.opportunity(),
            Some(Opportunity::FullAccessOrExpensiveResourcesRequired)
        );
        assert_eq!(rating.size(), Some(Size::Developers));
        assert_eq!(
            rating.ease_of_discovery(),
            Some(EaseOfDiscovery::PracticallyImpossible)
        );
        assert_eq!(rating.ease_of_exploit(), Some(EaseOfExploit::Theoretical));
        assert_eq!(rating.awareness(), Some(Awareness::Unknown));
        assert_eq!(
            rating.intrusion_detection(),
            Some(IntrusionDetection::ActiveDetectionInApplication)
        );
        assert_eq!(
            rating.loss_of_confidentiality(),
            Some(LossOfConfidentiality::MinimalNonSensitiveDataDisclosed)
        );
        assert_eq!(
            rating.loss_of_integrity(),
            Some(LossOfIntegrity::MinimalSlightlyCorruptData)
        );
        assert_eq!(
            rating.loss_of_availability(),
            Some(LossOfAvailability::MinimalSecondaryServicesInterrupted)
        );
        assert_eq!(
            rating.loss_of_accountability(),
            Some(LossOfAccountability::FullyTraceable)
        );
        assert_eq!(
            rating.financial_damage(),
            Some(FinancialDamage::LessThanTheCostToFixTheVulnerability)
        );
        assert_eq!(rating.reputation_damage(), Some(ReputationDamage::MinimalDamage));
        assert_eq!(rating.non_compliance(), Some(NonCompliance::MinorViolation));
        assert_eq!(rating.privacy_violation(), Some(PrivacyViolation::OneIndividual));

        let score = rating.calculate().unwrap();
        assert_eq!(score.likelihood_score(), 1.0);
        assert_eq!(score.technical_impact_score(), 1.25);
        assert_eq!(score.business_impact_score(), 1.75);
        assert_eq!(score.business_impact(), Level::Low);
    }

    #[test]
    fn non_digit_token_is_invalid() {
        let err = decode(
            "SL:1/M:1/O:0/S:2/ED:1/EE:null/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3",
        )
        .unwrap_err();
        assert!(err.is_invalid_vector());
        assert!(err.to_string().contains("EE:null"));
    }

    #[test]
    fn empty_input_is_invalid() {
        let err = decode("").unwrap_err();
        assert_eq!(err, RatingError::invalid_vector("", "vector is empty"));
    }

    #[test]
    fn grammar_violations_are_invalid() {
        let cases = [
            // reordered fields
            "M:1/SL:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3",
            // two-digit value
            "SL:1/M:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:33",
            // surrounding whitespace
            " SL:1/M:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3",
            // trailing separator
            "SL:1/M:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3/",
            // missing field
            "SL:1/M:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2",
            // lowercase code
            "sl:1/M:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3",
            // non-ASCII digit
            "SL:\u{0661}/M:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3",
        ];
        for case in cases {
            let err = decode(case).unwrap_err();
            assert!(err.is_invalid_vector(), "accepted {case:?}");
        }
    }

    #[test]
    fn unmatched_weight_is_invalid_not_missing() {
        // Opportunity has no enumerant weighted 1.
        let err = decode(
            "SL:1/M:1/O:1/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3",
        )
        .unwrap_err();
        match err {
            RatingError::InvalidVector { reason, .. } => {
                assert!(reason.contains("Opportunity (O)"), "{reason}");
            }
            other => panic!("expected InvalidVector, got {other:?}"),
        }
    }

    #[test]
    fn encode_produces_canonical_order() {
        let rating = decode(REFERENCE).unwrap();
        assert_eq!(encode(&rating).unwrap(), REFERENCE);
    }

    #[test]
    fn encode_requires_complete_rating() {
        let rating = RiskRating::new().with(SkillLevel::NoTechnicalSkills);
        let err = encode(&rating).unwrap_err();
        assert!(err.is_missing_factor());
        assert_eq!(err.missing_categories().len(), 15);
    }

    #[test]
    fn shared_weight_decodes_to_first_declared() {
        let rating = decode(REFERENCE)
            .unwrap()
            .with(Size::SystemAdministrators)
            .with(LossOfAvailability::ExtensiveSecondaryServicesInterrupted);
        let vector = encode(&rating).unwrap();
        let decoded = decode(&vector).unwrap();

        assert_eq!(decoded.size(), Some(Size::Developers));
        assert_eq!(
            decoded.loss_of_availability(),
            Some(LossOfAvailability::MinimalPrimaryServicesInterrupted)
        );
        assert_eq!(encode(&decoded).unwrap(), vector);
    }

    #[test]
    fn pattern_constant_matches_regex_shape() {
        let from_regex = VECTOR_REGEX.as_str().replace("([0-9])", r"\d");
        assert_eq!(format!("^{VECTOR_PATTERN}$"), from_regex);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn pick<F: Selectable>() -> impl Strategy<Value = F> {
        prop::sample::select(F::all())
    }

    prop_compose! {
        fn threat_and_vulnerability()(
            sl in pick::<SkillLevel>(),
            m in pick::<Motive>(),
            o in pick::<Opportunity>(),
            s in pick::<Size>(),
            ed in pick::<EaseOfDiscovery>(),
            ee in pick::<EaseOfExploit>(),
            a in pick::<Awareness>(),
            id in pick::<IntrusionDetection>(),
        ) -> RiskRating {
            RiskRating::new()
                .with(sl).with(m).with(o).with(s)
                .with(ed).with(ee).with(a).with(id)
        }
    }

    prop_compose! {
        fn impacts()(
            lc in pick::<LossOfConfidentiality>(),
            li in pick::<LossOfIntegrity>(),
            lav in pick::<LossOfAvailability>(),
            lac in pick::<LossOfAccountability>(),
            fd in pick::<FinancialDamage>(),
            rd in pick::<ReputationDamage>(),
            nc in pick::<NonCompliance>(),
            pv in pick::<PrivacyViolation>(),
        ) -> (
            LossOfConfidentiality,
            LossOfIntegrity,
            LossOfAvailability,
            LossOfAccountability,
            FinancialDamage,
            ReputationDamage,
            NonCompliance,
            PrivacyViolation,
        ) {
            (lc, li, lav, lac, fd, rd, nc, pv)
        }
    }

    prop_compose! {
        fn any_rating()(base in threat_and_vulnerability(), impact in impacts()) -> RiskRating {
            let (lc, li, lav, lac, fd, rd, nc, pv) = impact;
            base.with(lc).with(li).with(lav).with(lac)
                .with(fd).with(rd).with(nc).with(pv)
        }
    }

    proptest! {
        #[test]
        fn round_trip_preserves_weights(rating in any_rating()) {
            let vector = encode(&rating).unwrap();
            let decoded = decode(&vector).unwrap();

            prop_assert_eq!(encode(&decoded).unwrap(), vector);
            prop_assert_eq!(rating.calculate().unwrap(), decoded.calculate().unwrap());
            for category in Category::ALL {
                prop_assert!(decoded.is_selected(category));
            }
        }

        #[test]
        fn complete_rating_always_scores(rating in any_rating()) {
            let score = rating.calculate().unwrap();
            prop_assert!((0.0..=9.0).contains(&score.likelihood_score()));
            prop_assert!((0.0..=9.0).contains(&score.technical_impact_score()));
            prop_assert!((0.0..=9.0).contains(&score.business_impact_score()));
        }

        #[test]
        fn any_missing_slot_fails(rating in any_rating(), idx in 0usize..16) {
            let category = Category::ALL[idx];
            let mut rating = rating;
            rating.clear(category);
            let err = rating.calculate().unwrap_err();
            prop_assert_eq!(err.missing_categories(), &[category][..]);
        }

        #[test]
        fn arbitrary_text_never_panics(input in ".{0,80}") {
            let _ = decode(&input);
        }
    }
}
