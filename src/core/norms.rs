//! Norm catalog - mastery ages and valid word positions per sound
//!
//! The catalog is pure data: a mastery-age table parameterized by country
//! and a position table derived from a fixed override list. Both are built
//! fresh per assessment run and never mutated afterwards.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::classify::Observation;

/// A phoneme or consonant cluster token (IPA, may be multi-character)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sound(String);

impl Sound {
    pub fn new(token: impl Into<String>) -> Self {
        Sound(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this token is one of the fixed consonant clusters
    pub fn is_cluster(&self) -> bool {
        CLUSTERS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Sound {
    fn from(token: &str) -> Self {
        Sound(token.to_string())
    }
}

/// Word position a sound is assessed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Initial,
    Medial,
    Final,
}

impl Position {
    /// All positions, in canonical order
    pub const ALL: [Position; 3] = [Position::Initial, Position::Medial, Position::Final];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Initial => "initial",
            Position::Medial => "medial",
            Position::Final => "final",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Country selector for dialect-aware mastery norms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Country {
    Australia,
    UnitedKingdom,
    Usa,
    Canada,
}

impl Country {
    /// Lenient parser for country values arriving from worksheet files.
    ///
    /// Returns `None` for anything unrecognized; callers fall back to the
    /// base mastery ages in that case rather than erroring.
    pub fn parse(s: &str) -> Option<Country> {
        match s.trim().to_lowercase().as_str() {
            "australia" | "au" => Some(Country::Australia),
            "united kingdom" | "united-kingdom" | "uk" | "gb" => Some(Country::UnitedKingdom),
            "usa" | "us" | "united states" | "united-states" => Some(Country::Usa),
            "canada" | "ca" => Some(Country::Canada),
            _ => None,
        }
    }

    /// Mastery-age overrides applied atop the base table for this country.
    ///
    /// Only /r/ and the dental fricatives vary by region; everything else,
    /// clusters included, is country-invariant.
    pub fn mastery_overrides(&self) -> &'static [(&'static str, u32)] {
        match self {
            Country::Usa | Country::Canada => &[("r", 72), ("θ", 84), ("ð", 72)],
            Country::UnitedKingdom | Country::Australia => &[("r", 60), ("θ", 96), ("ð", 96)],
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Country::Australia => write!(f, "Australia"),
            Country::UnitedKingdom => write!(f, "United Kingdom"),
            Country::Usa => write!(f, "USA"),
            Country::Canada => write!(f, "Canada"),
        }
    }
}

/// Base mastery ages in months, before country overrides.
///
/// Values are approximations based on international research. Table order
/// is fixed; it drives worksheet row order and must stay stable.
const BASE_MASTERY_AGES: &[(&str, u32)] = &[
    ("p", 36),
    ("b", 36),
    ("m", 36),
    ("n", 36),
    ("d", 36),
    ("t", 36),
    ("k", 48),
    ("g", 48),
    ("ŋ", 48),
    ("h", 36),
    ("w", 36),
    ("j", 36),
    ("f", 42),
    ("v", 60),
    ("s", 60),
    ("z", 60),
    ("l", 60),
    ("r", 72),
    ("ʃ", 60),
    ("ʒ", 72),
    ("tʃ", 60),
    ("dʒ", 72),
    ("θ", 84),
    ("ð", 84),
];

/// Uniform mastery age for all consonant clusters, every country.
///
/// A deliberate simplification rather than per-cluster research data.
pub const CLUSTER_MASTERY_MONTHS: u32 = 60;

/// The fixed consonant cluster list, assessed initial-position only
const CLUSTERS: &[&str] = &[
    "bl", "fl", "pl", "br", "fr", "pr", "kw", "tw", "gl", "kl", "dr", "gr", "kr", "tr", "θr",
    "sm", "sp", "sw", "sk", "sl", "sn", "st", "skr", "spr", "skw", "spl",
];

/// Restricted-position overrides. Sounds absent from this list default to
/// all three positions; explicit entries are never widened.
const POSITION_OVERRIDES: &[(&str, &[Position])] = &[
    ("tʃ", &[Position::Initial, Position::Medial, Position::Final]),
    ("dʒ", &[Position::Initial, Position::Medial, Position::Final]),
    ("ʒ", &[Position::Medial]),
    ("ð", &[Position::Initial, Position::Medial]),
    ("j", &[Position::Initial]),
    ("h", &[Position::Initial]),
    ("w", &[Position::Initial, Position::Medial]),
    ("r", &[Position::Initial, Position::Medial, Position::Final]),
    ("ŋ", &[Position::Medial, Position::Final]),
];

/// Mapping from sound to expected mastery age in months.
///
/// Entries keep insertion order (base table order, then clusters) so that
/// generated worksheets and assessment results are reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasteryTable {
    entries: Vec<(Sound, u32)>,
}

impl MasteryTable {
    /// Build the mastery table for the given country.
    ///
    /// `None` (unknown or unrecognized country) leaves the base ages
    /// untouched; this is a recovered condition, never an error.
    pub fn build(country: Option<Country>) -> Self {
        let mut entries: Vec<(Sound, u32)> = BASE_MASTERY_AGES
            .iter()
            .map(|(s, m)| (Sound::from(*s), *m))
            .collect();

        if let Some(country) = country {
            for (token, months) in country.mastery_overrides() {
                if let Some(entry) = entries.iter_mut().find(|(s, _)| s.as_str() == *token) {
                    entry.1 = *months;
                }
            }
        }

        for cluster in CLUSTERS {
            entries.push((Sound::from(*cluster), CLUSTER_MASTERY_MONTHS));
        }

        MasteryTable { entries }
    }

    /// Expected mastery age in months for a sound, if the sound is known
    pub fn mastery_months(&self, sound: &Sound) -> Option<u32> {
        self.entries
            .iter()
            .find(|(s, _)| s == sound)
            .map(|(_, m)| *m)
    }

    pub fn sounds(&self) -> impl Iterator<Item = &Sound> {
        self.entries.iter().map(|(s, _)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Sound, u32)> {
        self.entries.iter().map(|(s, m)| (s, *m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mapping from sound to the word positions it is assessed in.
///
/// Built from the mastery table so every sound is guaranteed an entry
/// before classification runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTable {
    entries: Vec<(Sound, Vec<Position>)>,
}

impl PositionTable {
    /// Build the position table covering every sound in `mastery`.
    ///
    /// Explicit overrides win as written, clusters are initial-only, and
    /// everything else defaults to all three positions.
    pub fn build(mastery: &MasteryTable) -> Self {
        let entries = mastery
            .sounds()
            .map(|sound| {
                let positions = POSITION_OVERRIDES
                    .iter()
                    .find(|(token, _)| *token == sound.as_str())
                    .map(|(_, positions)| positions.to_vec())
                    .unwrap_or_else(|| {
                        if sound.is_cluster() {
                            vec![Position::Initial]
                        } else {
                            Position::ALL.to_vec()
                        }
                    });
                (sound.clone(), positions)
            })
            .collect();

        PositionTable { entries }
    }

    pub fn positions(&self, sound: &Sound) -> Option<&[Position]> {
        self.entries
            .iter()
            .find(|(s, _)| s == sound)
            .map(|(_, p)| p.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Sound, &[Position])> {
        self.entries.iter().map(|(s, p)| (s, p.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The complete norm catalog for one country selection
#[derive(Debug, Clone)]
pub struct NormCatalog {
    pub mastery: MasteryTable,
    pub positions: PositionTable,
}

impl NormCatalog {
    pub fn build(country: Option<Country>) -> Self {
        let mastery = MasteryTable::build(country);
        let positions = PositionTable::build(&mastery);
        NormCatalog { mastery, positions }
    }

    /// Seed the exhaustive observation list: every sound crossed with each
    /// of its valid positions, produced pre-filled with the target sound.
    pub fn seed_observations(&self) -> Vec<Observation> {
        let mut observations = Vec::new();
        for (sound, positions) in self.positions.iter() {
            for position in positions {
                observations.push(Observation {
                    sound: sound.clone(),
                    position: *position,
                    produced: sound.as_str().to_string(),
                });
            }
        }
        observations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mastery_of(table: &MasteryTable, token: &str) -> u32 {
        table.mastery_months(&Sound::from(token)).unwrap()
    }

    #[test]
    fn test_north_american_overrides() {
        for country in [Country::Usa, Country::Canada] {
            let table = MasteryTable::build(Some(country));
            assert_eq!(mastery_of(&table, "r"), 72);
            assert_eq!(mastery_of(&table, "θ"), 84);
            assert_eq!(mastery_of(&table, "ð"), 72);
        }
    }

    #[test]
    fn test_uk_and_australia_overrides() {
        for country in [Country::UnitedKingdom, Country::Australia] {
            let table = MasteryTable::build(Some(country));
            assert_eq!(mastery_of(&table, "r"), 60);
            assert_eq!(mastery_of(&table, "θ"), 96);
            assert_eq!(mastery_of(&table, "ð"), 96);
        }
    }

    #[test]
    fn test_unknown_country_keeps_base_ages() {
        let table = MasteryTable::build(None);
        assert_eq!(mastery_of(&table, "r"), 72);
        assert_eq!(mastery_of(&table, "θ"), 84);
        assert_eq!(mastery_of(&table, "ð"), 84);
        assert_eq!(mastery_of(&table, "p"), 36);
    }

    #[test]
    fn test_clusters_uniform_across_countries() {
        for country in [
            None,
            Some(Country::Usa),
            Some(Country::Canada),
            Some(Country::UnitedKingdom),
            Some(Country::Australia),
        ] {
            let table = MasteryTable::build(country);
            for cluster in CLUSTERS {
                assert_eq!(
                    mastery_of(&table, cluster),
                    60,
                    "cluster /{cluster}/ should be 60 months"
                );
            }
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        for country in [None, Some(Country::Usa), Some(Country::UnitedKingdom)] {
            let a = MasteryTable::build(country);
            let b = MasteryTable::build(country);
            assert_eq!(a, b);
            assert_eq!(PositionTable::build(&a), PositionTable::build(&b));
        }
    }

    #[test]
    fn test_country_parse_lenient() {
        assert_eq!(Country::parse("UK"), Some(Country::UnitedKingdom));
        assert_eq!(Country::parse("united kingdom"), Some(Country::UnitedKingdom));
        assert_eq!(Country::parse(" USA "), Some(Country::Usa));
        assert_eq!(Country::parse("canada"), Some(Country::Canada));
        assert_eq!(Country::parse("Australia"), Some(Country::Australia));
        assert_eq!(Country::parse("narnia"), None);
        assert_eq!(Country::parse(""), None);
    }

    #[test]
    fn test_position_table_covers_every_sound() {
        let mastery = MasteryTable::build(Some(Country::Usa));
        let positions = PositionTable::build(&mastery);
        assert_eq!(positions.len(), mastery.len());
        for sound in mastery.sounds() {
            assert!(positions.positions(sound).is_some(), "no entry for /{sound}/");
        }
    }

    #[test]
    fn test_explicit_position_entries_not_widened() {
        let catalog = NormCatalog::build(Some(Country::Usa));
        let positions = &catalog.positions;
        assert_eq!(
            positions.positions(&Sound::from("ʒ")).unwrap(),
            &[Position::Medial]
        );
        assert_eq!(
            positions.positions(&Sound::from("ð")).unwrap(),
            &[Position::Initial, Position::Medial]
        );
        assert_eq!(
            positions.positions(&Sound::from("j")).unwrap(),
            &[Position::Initial]
        );
        assert_eq!(
            positions.positions(&Sound::from("ŋ")).unwrap(),
            &[Position::Medial, Position::Final]
        );
    }

    #[test]
    fn test_unlisted_sounds_default_to_all_positions() {
        let catalog = NormCatalog::build(None);
        assert_eq!(
            catalog.positions.positions(&Sound::from("p")).unwrap(),
            &Position::ALL
        );
        assert_eq!(
            catalog.positions.positions(&Sound::from("s")).unwrap(),
            &Position::ALL
        );
    }

    #[test]
    fn test_clusters_initial_only() {
        let catalog = NormCatalog::build(Some(Country::Canada));
        for cluster in CLUSTERS {
            assert_eq!(
                catalog.positions.positions(&Sound::from(*cluster)).unwrap(),
                &[Position::Initial]
            );
        }
    }

    #[test]
    fn test_seed_observations_exhaustive() {
        let catalog = NormCatalog::build(Some(Country::Usa));
        let observations = catalog.seed_observations();

        let expected: usize = catalog.positions.iter().map(|(_, p)| p.len()).sum();
        assert_eq!(observations.len(), expected);

        // no duplicates
        let mut seen = std::collections::HashSet::new();
        for obs in &observations {
            assert!(seen.insert((obs.sound.clone(), obs.position)));
        }

        // produced pre-filled with the target sound
        assert!(observations.iter().all(|o| o.produced == o.sound.as_str()));
    }

    #[test]
    fn test_seed_observation_order_follows_catalog() {
        let catalog = NormCatalog::build(None);
        let observations = catalog.seed_observations();
        assert_eq!(observations[0].sound, Sound::from("p"));
        assert_eq!(observations[0].position, Position::Initial);
        assert_eq!(observations[1].position, Position::Medial);
        assert_eq!(observations[2].position, Position::Final);
        // clusters come last, initial only
        assert_eq!(observations.last().unwrap().sound, Sound::from("spl"));
        assert_eq!(observations.last().unwrap().position, Position::Initial);
    }
}
