//! Classification engine - verdicts for observed sound productions

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::core::age::UNKNOWN_AGE;
use crate::core::norms::{MasteryTable, Position, Sound};

/// One assessed row: a target sound at a word position, and what the child
/// actually produced. `produced` defaults to the target sound and is
/// overwritten by the clinician when the production differed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub sound: Sound,
    pub position: Position,
    pub produced: String,
}

/// Three-way articulation verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    AgeAppropriate,
    IncorrectButAgeAppropriate,
    Delayed,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::AgeAppropriate => "Age Appropriate",
            Verdict::IncorrectButAgeAppropriate => "Incorrect but Age Appropriate",
            Verdict::Delayed => "Delayed",
        }
    }

    /// Display color for UI collaborators (hex, light green / amber / light red)
    pub fn display_color(&self) -> &'static str {
        match self {
            Verdict::AgeAppropriate => "#d4edda",
            Verdict::IncorrectButAgeAppropriate => "#ffe082",
            Verdict::Delayed => "#f8d7da",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One classified row, carrying the mastery age for report formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub sound: Sound,
    pub position: Position,
    pub verdict: Verdict,
    pub mastery_months: u32,
}

/// Classification failures are invariant violations, not clinical outcomes
#[derive(Debug, Error, Diagnostic)]
pub enum ClassifyError {
    /// An observation referenced a sound the mastery table does not know.
    /// The catalog guarantees coverage for generated worksheets, so this
    /// indicates a corrupted or hand-built worksheet row.
    #[error("sound /{0}/ is not in the mastery table")]
    #[diagnostic(
        code(artic::classify::unknown_sound),
        help("worksheet rows must use the sound tokens generated by `artic sheet new`")
    )]
    UnknownSound(Sound),
}

/// Classify every observation against the mastery table.
///
/// Pure and deterministic: output order matches input order. An unknown
/// age (`age_months == 0`) produces no results at all; the caller decides
/// how to surface that. Produced sounds are compared after trimming
/// surrounding whitespace, by exact case-sensitive string equality - no
/// phonetic distance, no partial credit.
pub fn classify(
    mastery: &MasteryTable,
    age_months: u32,
    observations: &[Observation],
) -> Result<Vec<ClassificationResult>, ClassifyError> {
    if age_months == UNKNOWN_AGE {
        return Ok(Vec::new());
    }

    let mut results = Vec::with_capacity(observations.len());
    for obs in observations {
        let mastery_months = mastery
            .mastery_months(&obs.sound)
            .ok_or_else(|| ClassifyError::UnknownSound(obs.sound.clone()))?;

        let produced = obs.produced.trim();
        let verdict = if produced == obs.sound.as_str() {
            Verdict::AgeAppropriate
        } else if age_months >= mastery_months {
            Verdict::Delayed
        } else {
            Verdict::IncorrectButAgeAppropriate
        };

        results.push(ClassificationResult {
            sound: obs.sound.clone(),
            position: obs.position,
            verdict,
            mastery_months,
        });
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::norms::{Country, NormCatalog};

    fn obs(sound: &str, position: Position, produced: &str) -> Observation {
        Observation {
            sound: Sound::from(sound),
            position,
            produced: produced.to_string(),
        }
    }

    #[test]
    fn test_correct_production_is_age_appropriate() {
        let mastery = MasteryTable::build(Some(Country::Usa));
        let results = classify(&mastery, 52, &[obs("r", Position::Initial, "r")]).unwrap();
        assert_eq!(results[0].verdict, Verdict::AgeAppropriate);
    }

    #[test]
    fn test_substitution_before_mastery_age_is_incorrect_but_age_appropriate() {
        // USA, age 4;4 -> 52 months, /r/ mastery 72
        let mastery = MasteryTable::build(Some(Country::Usa));
        let results = classify(&mastery, 52, &[obs("r", Position::Initial, "w")]).unwrap();
        assert_eq!(results[0].verdict, Verdict::IncorrectButAgeAppropriate);
        assert_eq!(results[0].mastery_months, 72);
    }

    #[test]
    fn test_substitution_past_mastery_age_is_delayed() {
        let mastery = MasteryTable::build(Some(Country::Usa));
        let results = classify(&mastery, 80, &[obs("r", Position::Initial, "w")]).unwrap();
        assert_eq!(results[0].verdict, Verdict::Delayed);
    }

    #[test]
    fn test_age_exactly_at_mastery_is_delayed() {
        let mastery = MasteryTable::build(Some(Country::Usa));
        let results = classify(&mastery, 72, &[obs("r", Position::Final, "w")]).unwrap();
        assert_eq!(results[0].verdict, Verdict::Delayed);
    }

    #[test]
    fn test_produced_is_trimmed_before_comparison() {
        let mastery = MasteryTable::build(None);
        let results = classify(&mastery, 52, &[obs("s", Position::Initial, "  s ")]).unwrap();
        assert_eq!(results[0].verdict, Verdict::AgeAppropriate);
    }

    #[test]
    fn test_comparison_is_case_sensitive_exact_match() {
        let mastery = MasteryTable::build(None);
        let results = classify(&mastery, 40, &[obs("s", Position::Initial, "S")]).unwrap();
        assert_eq!(results[0].verdict, Verdict::IncorrectButAgeAppropriate);
    }

    #[test]
    fn test_unknown_age_produces_no_results() {
        let catalog = NormCatalog::build(Some(Country::Usa));
        let observations = catalog.seed_observations();
        let results = classify(&catalog.mastery, 0, &observations).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_unknown_sound_is_fatal() {
        let mastery = MasteryTable::build(None);
        let err = classify(&mastery, 52, &[obs("xx", Position::Initial, "xx")]).unwrap_err();
        assert!(matches!(err, ClassifyError::UnknownSound(_)));
    }

    #[test]
    fn test_output_preserves_input_order() {
        let catalog = NormCatalog::build(Some(Country::Canada));
        let observations = catalog.seed_observations();
        let results = classify(&catalog.mastery, 60, &observations).unwrap();
        assert_eq!(results.len(), observations.len());
        for (obs, result) in observations.iter().zip(&results) {
            assert_eq!(obs.sound, result.sound);
            assert_eq!(obs.position, result.position);
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        let catalog = NormCatalog::build(Some(Country::Australia));
        let mut observations = catalog.seed_observations();
        observations[5].produced = "t".to_string();
        observations[20].produced = "d".to_string();
        let a = classify(&catalog.mastery, 66, &observations).unwrap();
        let b = classify(&catalog.mastery, 66, &observations).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_correct_productions_all_age_appropriate() {
        let catalog = NormCatalog::build(Some(Country::Usa));
        let observations = catalog.seed_observations();
        let results = classify(&catalog.mastery, 90, &observations).unwrap();
        assert!(results.iter().all(|r| r.verdict == Verdict::AgeAppropriate));
    }
}
