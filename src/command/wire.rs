//! Wire-form encoding for the simulation endpoint
//!
//! The consuming simulation keeps its legacy field names: the leading unit
//! travels under `infantry` whatever its type, the attack target under
//! `target`, and archers go out as `bowman`. Directions pass through under
//! their canonical names.

use crate::core::types::{Command, DirectionSymbol, UnitSymbol};
use serde_json::{json, Value};

/// Wire spelling of a unit symbol (total; every symbol has one)
fn wire_unit(unit: UnitSymbol) -> &'static str {
    match unit {
        UnitSymbol::Infantry => "infantry",
        UnitSymbol::Archer => "bowman",
        UnitSymbol::Cavalry => "cavalry",
        UnitSymbol::Mage => "mage",
        UnitSymbol::All => "all",
    }
}

/// Wire spelling of a direction symbol
fn wire_direction(direction: DirectionSymbol) -> &'static str {
    match direction {
        DirectionSymbol::Forward => "forward",
        DirectionSymbol::Backward => "backward",
        DirectionSymbol::Up => "up",
        DirectionSymbol::Down => "down",
        DirectionSymbol::Halt => "halt",
    }
}

/// Re-encode a resolved command into the simulation's wire object
///
/// Attack carries `infantry` and `target`, Move carries `infantry` and
/// `direction`, Invalid is exactly `{"infantry": null, "direction": null}`.
pub fn to_wire_form(command: &Command) -> Value {
    match command {
        Command::Attack { source, target } => json!({
            "infantry": wire_unit(*source),
            "target": wire_unit(*target)
        }),
        Command::Move { unit, direction } => json!({
            "infantry": wire_unit(*unit),
            "direction": wire_direction(*direction)
        }),
        Command::Invalid => json!({
            "infantry": null,
            "direction": null
        }),
    }
}

/// Render the wire object as one line of UTF-8 JSON text
pub fn to_wire_json(command: &Command) -> String {
    to_wire_form(command).to_string()
}
