//! Load replacement vocabularies from TOML files

use crate::core::types::{DirectionSymbol, UnitSymbol};
use crate::vocab::tables::Vocabulary;
use std::fs;
use std::path::Path;

/// Load a vocabulary from a TOML file
///
/// The loaded vocabulary replaces the built-in tables entirely; a file
/// states the whole vocabulary it wants.
pub fn load_vocab_file(path: &Path) -> Result<Vocabulary, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_vocab_toml(&content)
}

/// Parse a vocabulary from TOML text
///
/// One table per symbol kind, keyed by canonical name, each entry an array
/// of surface forms:
///
/// ```toml
/// [units]
/// infantry = ["보병", "근접"]
///
/// [directions]
/// forward = ["앞", "돌격"]
/// ```
///
/// Unknown canonical names are errors; the canonical sets are closed.
pub fn parse_vocab_toml(content: &str) -> Result<Vocabulary, String> {
    let toml: toml::Value = content
        .parse()
        .map_err(|e| format!("Invalid TOML: {}", e))?;

    let mut vocab = Vocabulary::empty();

    if let Some(units) = toml.get("units").and_then(|v| v.as_table()) {
        for (name, surfaces) in units {
            let symbol = parse_unit_symbol(name)
                .ok_or_else(|| format!("Unknown unit symbol '{}'", name))?;
            for surface in parse_surface_list(name, surfaces)? {
                vocab.add_unit(surface, symbol);
            }
        }
    }

    if let Some(directions) = toml.get("directions").and_then(|v| v.as_table()) {
        for (name, surfaces) in directions {
            let symbol = parse_direction_symbol(name)
                .ok_or_else(|| format!("Unknown direction symbol '{}'", name))?;
            for surface in parse_surface_list(name, surfaces)? {
                vocab.add_direction(surface, symbol);
            }
        }
    }

    Ok(vocab)
}

fn parse_surface_list(name: &str, value: &toml::Value) -> Result<Vec<String>, String> {
    let array = value
        .as_array()
        .ok_or_else(|| format!("'{}' must be an array of surface forms", name))?;

    let mut surfaces = Vec::new();
    for entry in array {
        let surface = entry
            .as_str()
            .ok_or_else(|| format!("'{}' contains a non-string surface form", name))?;
        surfaces.push(surface.to_string());
    }
    Ok(surfaces)
}

fn parse_unit_symbol(s: &str) -> Option<UnitSymbol> {
    match s {
        "infantry" => Some(UnitSymbol::Infantry),
        "archer" => Some(UnitSymbol::Archer),
        "cavalry" => Some(UnitSymbol::Cavalry),
        "mage" => Some(UnitSymbol::Mage),
        "all" => Some(UnitSymbol::All),
        _ => None,
    }
}

fn parse_direction_symbol(s: &str) -> Option<DirectionSymbol> {
    match s {
        "forward" => Some(DirectionSymbol::Forward),
        "backward" => Some(DirectionSymbol::Backward),
        "up" => Some(DirectionSymbol::Up),
        "down" => Some(DirectionSymbol::Down),
        "halt" => Some(DirectionSymbol::Halt),
        _ => None,
    }
}
