//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Canonical unit symbol
///
/// Every surface word in the unit synonym table collapses into one of these.
/// `All` means the entire army rather than a single troop type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSymbol {
    Infantry,
    Archer,
    Cavalry,
    Mage,
    All,
}

/// Canonical direction symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionSymbol {
    Forward,
    Backward,
    Up,
    Down,
    Halt,
}

/// One resolved battle command
///
/// Exactly one shape per resolution. `Invalid` is the designated value for
/// "no actionable command" rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Attack {
        source: UnitSymbol,
        target: UnitSymbol,
    },
    Move {
        unit: UnitSymbol,
        direction: DirectionSymbol,
    },
    Invalid,
}

impl Command {
    /// Returns true if this command orders the simulation to do something
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Command::Invalid)
    }
}
