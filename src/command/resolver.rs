//! Command resolution over canonical symbols
//!
//! Applies a fixed decision procedure to the canonicalizer's output. Every
//! input resolves to exactly one command shape; there is no error path.

use crate::command::canonical::{canonicalize, canonicalize_with};
use crate::core::types::{Command, DirectionSymbol, UnitSymbol};
use crate::vocab::tables::Vocabulary;

/// Resolve canonical symbols into a command
///
/// Decision order, first matching rule wins:
/// 1. Two or more units with `All` in the second slot: invalid (broadcast
///    attack targets are rejected).
/// 2. Two or more units: attack, first as source, second as target; further
///    units are ignored.
/// 3. Exactly one unit plus a direction: move.
/// 4. Anything else: invalid.
pub fn resolve(units: &[UnitSymbol], direction: Option<DirectionSymbol>) -> Command {
    if units.len() >= 2 {
        if units[1] == UnitSymbol::All {
            tracing::debug!("attack order names all units as target, rejected");
            return Command::Invalid;
        }
        return Command::Attack {
            source: units[0],
            target: units[1],
        };
    }

    if units.len() == 1 {
        if let Some(direction) = direction {
            return Command::Move {
                unit: units[0],
                direction,
            };
        }
    }

    Command::Invalid
}

/// Interpret raw tokens end to end against the process-wide vocabulary
pub fn interpret<S: AsRef<str>>(tokens: &[S]) -> Command {
    let canonical = canonicalize(tokens);
    resolve(&canonical.units, canonical.direction)
}

/// Interpret raw tokens end to end against an explicit vocabulary
pub fn interpret_with<S: AsRef<str>>(vocab: &Vocabulary, tokens: &[S]) -> Command {
    let canonical = canonicalize_with(vocab, tokens);
    resolve(&canonical.units, canonical.direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_unit_attack() {
        let command = resolve(&[UnitSymbol::Infantry, UnitSymbol::Archer], None);
        assert_eq!(
            command,
            Command::Attack {
                source: UnitSymbol::Infantry,
                target: UnitSymbol::Archer,
            }
        );
    }

    #[test]
    fn test_all_as_target_rejected() {
        let command = resolve(&[UnitSymbol::Infantry, UnitSymbol::All], None);
        assert_eq!(command, Command::Invalid);
    }

    #[test]
    fn test_all_as_source_allowed() {
        let command = resolve(&[UnitSymbol::All, UnitSymbol::Cavalry], None);
        assert_eq!(
            command,
            Command::Attack {
                source: UnitSymbol::All,
                target: UnitSymbol::Cavalry,
            }
        );
    }

    #[test]
    fn test_extra_units_ignored() {
        let command = resolve(
            &[UnitSymbol::Mage, UnitSymbol::Infantry, UnitSymbol::All],
            None,
        );
        assert_eq!(
            command,
            Command::Attack {
                source: UnitSymbol::Mage,
                target: UnitSymbol::Infantry,
            }
        );
    }

    #[test]
    fn test_direction_ignored_when_attacking() {
        let command = resolve(
            &[UnitSymbol::Infantry, UnitSymbol::Archer],
            Some(DirectionSymbol::Forward),
        );
        assert_eq!(
            command,
            Command::Attack {
                source: UnitSymbol::Infantry,
                target: UnitSymbol::Archer,
            }
        );
    }

    #[test]
    fn test_single_unit_move() {
        let command = resolve(&[UnitSymbol::Cavalry], Some(DirectionSymbol::Forward));
        assert_eq!(
            command,
            Command::Move {
                unit: UnitSymbol::Cavalry,
                direction: DirectionSymbol::Forward,
            }
        );
    }

    #[test]
    fn test_all_can_move() {
        let command = resolve(&[UnitSymbol::All], Some(DirectionSymbol::Halt));
        assert_eq!(
            command,
            Command::Move {
                unit: UnitSymbol::All,
                direction: DirectionSymbol::Halt,
            }
        );
    }

    #[test]
    fn test_single_unit_without_direction() {
        assert_eq!(resolve(&[UnitSymbol::Cavalry], None), Command::Invalid);
    }

    #[test]
    fn test_zero_units() {
        assert_eq!(resolve(&[], None), Command::Invalid);
        assert_eq!(resolve(&[], Some(DirectionSymbol::Forward)), Command::Invalid);
    }

    #[test]
    fn test_interpret_korean_attack() {
        let command = interpret(&["보병", "궁수", "공격해"]);
        assert_eq!(
            command,
            Command::Attack {
                source: UnitSymbol::Infantry,
                target: UnitSymbol::Archer,
            }
        );
    }

    #[test]
    fn test_interpret_korean_move() {
        let command = interpret(&["기병", "앞으로"]);
        assert_eq!(
            command,
            Command::Move {
                unit: UnitSymbol::Cavalry,
                direction: DirectionSymbol::Forward,
            }
        );
    }

    #[test]
    fn test_interpret_with_custom_vocabulary() {
        let mut vocab = Vocabulary::empty();
        vocab.add_unit("footmen", UnitSymbol::Infantry);
        vocab.add_direction("advance", DirectionSymbol::Forward);

        let command = interpret_with(&vocab, &["footmen", "advance"]);
        assert_eq!(
            command,
            Command::Move {
                unit: UnitSymbol::Infantry,
                direction: DirectionSymbol::Forward,
            }
        );

        // The built-in Korean forms are unknown to this vocabulary
        assert_eq!(interpret_with(&vocab, &["보병", "궁수"]), Command::Invalid);
    }
}
