//! Move sets and move indices.

use crate::error::{GameError, MoveSetViolation, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Position of a move within its [`MoveSet`] (0-based)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveIndex(usize);

impl MoveIndex {
    pub(crate) fn at(position: usize) -> Self {
        Self(position)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered set of distinct move labels.
///
/// Always holds an odd number of moves, at least three, none empty and no
/// label twice. Immutable once built, so rounds may share it freely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveSet {
    labels: Vec<String>,
}

impl MoveSet {
    /// Build a move set, trimming surrounding whitespace from each label.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|l| l.as_ref().trim().to_string())
            .collect();

        if let Some(pos) = labels.iter().position(|l| l.is_empty()) {
            return Err(MoveSetViolation::EmptyLabel(pos).into());
        }
        if labels.len() < MIN_MOVES {
            return Err(MoveSetViolation::TooFew(labels.len()).into());
        }
        if labels.len() % 2 == 0 {
            return Err(MoveSetViolation::EvenCount(labels.len()).into());
        }
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(MoveSetViolation::Duplicate(label.clone()).into());
            }
        }

        Ok(Self { labels })
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Never true for a constructed set
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Look up a label's position
    pub fn index_of(&self, label: &str) -> Result<MoveIndex> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(MoveIndex)
            .ok_or_else(|| GameError::UnknownMove(label.to_string()))
    }

    /// Index for a raw position, if in range
    pub fn index(&self, position: usize) -> Option<MoveIndex> {
        (position < self.labels.len()).then_some(MoveIndex(position))
    }

    /// Label at `index`, which must come from this set
    pub fn label(&self, index: MoveIndex) -> &str {
        &self.labels[index.0]
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

impl<'de> Deserialize<'de> for MoveSet {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            labels: Vec<String>,
        }
        let raw = Raw::deserialize(d)?;
        MoveSet::new(raw.labels).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(labels: &[&str]) -> MoveSetViolation {
        match MoveSet::new(labels) {
            Err(GameError::InvalidMoveSet(v)) => v,
            other => panic!("expected InvalidMoveSet, got {:?}", other),
        }
    }

    #[test]
    fn test_classic_set_is_valid() {
        let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.labels(), ["Rock", "Paper", "Scissors"]);
    }

    #[test]
    fn test_too_few_moves() {
        assert_eq!(violation(&[]), MoveSetViolation::TooFew(0));
        assert_eq!(violation(&["Rock"]), MoveSetViolation::TooFew(1));
        assert_eq!(violation(&["Rock", "Paper"]), MoveSetViolation::TooFew(2));
    }

    #[test]
    fn test_even_count() {
        assert_eq!(
            violation(&["Rock", "Paper", "Scissors", "Lizard"]),
            MoveSetViolation::EvenCount(4)
        );
    }

    #[test]
    fn test_duplicate_label() {
        assert_eq!(
            violation(&["Rock", "Paper", "Rock"]),
            MoveSetViolation::Duplicate("Rock".to_string())
        );
    }

    #[test]
    fn test_labels_are_trimmed() {
        let moves = MoveSet::new([" Rock", "Paper ", " Scissors "]).unwrap();
        assert_eq!(moves.labels(), ["Rock", "Paper", "Scissors"]);
    }

    #[test]
    fn test_trimming_exposes_duplicates() {
        assert_eq!(
            violation(&["Rock", "Paper", " Rock "]),
            MoveSetViolation::Duplicate("Rock".to_string())
        );
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(
            violation(&["Rock", "  ", "Scissors"]),
            MoveSetViolation::EmptyLabel(1)
        );
    }

    #[test]
    fn test_index_lookup() {
        let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        let idx = moves.index_of("Scissors").unwrap();

        assert_eq!(idx.get(), 2);
        assert_eq!(moves.label(idx), "Scissors");
        assert!(matches!(
            moves.index_of("rock"),
            Err(GameError::UnknownMove(l)) if l == "rock"
        ));
    }

    #[test]
    fn test_raw_index_bounds() {
        let moves = MoveSet::new(["a", "b", "c"]).unwrap();
        assert!(moves.index(2).is_some());
        assert!(moves.index(3).is_none());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: MoveSet = serde_json::from_str(r#"{"labels":["a","b","c"]}"#).unwrap();
        assert_eq!(ok.len(), 3);

        let bad = serde_json::from_str::<MoveSet>(r#"{"labels":["a","b"]}"#);
        assert!(bad.is_err());
    }
}
