//! Token canonicalization over the synonym vocabularies
//!
//! Absorbs vocabulary variance (spelling, dialect, transcription noise) so
//! the resolver only ever sees the closed symbol sets.

use crate::core::types::{DirectionSymbol, UnitSymbol};
use crate::vocab::tables::{vocabulary, Vocabulary};

/// Canonical symbols extracted from one utterance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canonicalization {
    /// Unit symbols in encounter order; duplicates are preserved
    pub units: Vec<UnitSymbol>,
    /// The first direction token encountered; later ones are ignored
    pub direction: Option<DirectionSymbol>,
}

/// Canonicalize tokens against the process-wide vocabulary
pub fn canonicalize<S: AsRef<str>>(tokens: &[S]) -> Canonicalization {
    canonicalize_with(vocabulary(), tokens)
}

/// Canonicalize tokens against an explicit vocabulary
///
/// Per token, in stream order: a unit-table match is appended to the unit
/// list; otherwise a direction-table match fills the direction slot if it is
/// still empty; otherwise the token is skipped silently. A token matching
/// the unit table is never also checked against the direction table.
pub fn canonicalize_with<S: AsRef<str>>(vocab: &Vocabulary, tokens: &[S]) -> Canonicalization {
    let mut result = Canonicalization::default();

    for token in tokens {
        let token = token.as_ref();
        if let Some(unit) = vocab.unit(token) {
            result.units.push(unit);
        } else if let Some(direction) = vocab.direction(token) {
            if result.direction.is_none() {
                result.direction = Some(direction);
            }
        } else {
            tracing::trace!(token, "token matched neither synonym table");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preservation() {
        let result = canonicalize(&["기병", "보병"]);
        assert_eq!(result.units, vec![UnitSymbol::Cavalry, UnitSymbol::Infantry]);
        assert!(result.direction.is_none());
    }

    #[test]
    fn test_duplicates_preserved() {
        let result = canonicalize(&["보병", "보병", "땅개"]);
        assert_eq!(
            result.units,
            vec![
                UnitSymbol::Infantry,
                UnitSymbol::Infantry,
                UnitSymbol::Infantry
            ]
        );
    }

    #[test]
    fn test_first_direction_wins() {
        let result = canonicalize(&["앞", "뒤"]);
        assert_eq!(result.direction, Some(DirectionSymbol::Forward));
        assert!(result.units.is_empty());
    }

    #[test]
    fn test_later_directions_ignored() {
        let result = canonicalize(&["기병", "정지", "앞으로", "밑으로"]);
        assert_eq!(result.units, vec![UnitSymbol::Cavalry]);
        assert_eq!(result.direction, Some(DirectionSymbol::Halt));
    }

    #[test]
    fn test_unmatched_tokens_ignored() {
        let result = canonicalize(&["xyz", "보병"]);
        assert_eq!(result.units, vec![UnitSymbol::Infantry]);
        assert!(result.direction.is_none());
    }

    #[test]
    fn test_empty_input() {
        let result = canonicalize::<&str>(&[]);
        assert!(result.units.is_empty());
        assert!(result.direction.is_none());
    }

    #[test]
    fn test_all_unmatched_input() {
        let result = canonicalize(&["응", "그래", "출동"]);
        assert!(result.units.is_empty());
        assert!(result.direction.is_none());
    }

    #[test]
    fn test_unit_table_checked_first() {
        // With a surface form in both tables, the unit reading wins and the
        // token never reaches the direction table
        let mut vocab = Vocabulary::empty();
        vocab.add_unit("돌격대", UnitSymbol::Infantry);
        vocab.add_direction("돌격대", DirectionSymbol::Forward);

        let result = canonicalize_with(&vocab, &["돌격대"]);
        assert_eq!(result.units, vec![UnitSymbol::Infantry]);
        assert!(result.direction.is_none());
    }

    #[test]
    fn test_owned_tokens_accepted() {
        let tokens: Vec<String> = vec!["마법사".to_string(), "위로".to_string()];
        let result = canonicalize(&tokens);
        assert_eq!(result.units, vec![UnitSymbol::Mage]);
        assert_eq!(result.direction, Some(DirectionSymbol::Up));
    }
}
