//! Synonym tables mapping Korean battle speech onto canonical symbols
//!
//! Two independent tables: surface unit words and surface direction words.
//! Each table is many-to-one onto its closed canonical set, built once and
//! never mutated afterwards. Vocabulary growth happens here (or in a TOML
//! override file), never in the decision logic.

use crate::core::types::{DirectionSymbol, UnitSymbol};
use ahash::AHashMap;

/// Built-in unit synonyms, straight from the production vocabulary
///
/// Keys are unique across the whole table; duplicates would silently
/// collapse on insertion.
const UNIT_SYNONYMS: &[(&str, UnitSymbol)] = &[
    ("보병", UnitSymbol::Infantry),
    ("근접", UnitSymbol::Infantry),
    ("전사", UnitSymbol::Infantry),
    ("검사", UnitSymbol::Infantry),
    ("탱커", UnitSymbol::Infantry),
    ("근거리", UnitSymbol::Infantry),
    ("병", UnitSymbol::Infantry),
    ("무병", UnitSymbol::Infantry),
    ("뚜벅이", UnitSymbol::Infantry),
    ("땅개", UnitSymbol::Infantry),
    ("고기", UnitSymbol::Infantry),
    ("방패", UnitSymbol::Infantry),
    ("고기방패", UnitSymbol::Infantry),
    ("고병", UnitSymbol::Infantry),
    ("칼", UnitSymbol::Infantry),
    ("부병", UnitSymbol::Infantry),
    ("궁병", UnitSymbol::Archer),
    ("궁수", UnitSymbol::Archer),
    ("원거리", UnitSymbol::Archer),
    ("활쟁이", UnitSymbol::Archer),
    ("활병", UnitSymbol::Archer),
    ("화살병", UnitSymbol::Archer),
    ("아처", UnitSymbol::Archer),
    ("원딜", UnitSymbol::Archer),
    ("공수", UnitSymbol::Archer),
    ("공병", UnitSymbol::Archer),
    ("기병", UnitSymbol::Cavalry),
    ("기마병", UnitSymbol::Cavalry),
    ("말탄병사", UnitSymbol::Cavalry),
    ("말병", UnitSymbol::Cavalry),
    ("빠른유닛", UnitSymbol::Cavalry),
    ("말", UnitSymbol::Cavalry),
    ("기사", UnitSymbol::Cavalry),
    ("마법사", UnitSymbol::Mage),
    ("법사", UnitSymbol::Mage),
    ("마법", UnitSymbol::Mage),
    ("마술사", UnitSymbol::Mage),
    ("요술사", UnitSymbol::Mage),
    ("지팡이", UnitSymbol::Mage),
    ("소서러", UnitSymbol::Mage),
    ("메이지", UnitSymbol::Mage),
    ("전체", UnitSymbol::All),
    ("전원", UnitSymbol::All),
    ("모두", UnitSymbol::All),
    ("모든병력", UnitSymbol::All),
    ("모든", UnitSymbol::All),
    ("병력", UnitSymbol::All),
    ("전부", UnitSymbol::All),
    ("전부다", UnitSymbol::All),
    ("다", UnitSymbol::All),
];

/// Built-in direction synonyms
const DIRECTION_SYNONYMS: &[(&str, DirectionSymbol)] = &[
    ("앞", DirectionSymbol::Forward),
    ("앞으로", DirectionSymbol::Forward),
    ("전방", DirectionSymbol::Forward),
    ("돌격", DirectionSymbol::Forward),
    ("돌진", DirectionSymbol::Forward),
    ("뒤", DirectionSymbol::Backward),
    ("뒤로", DirectionSymbol::Backward),
    ("뒤쪽", DirectionSymbol::Backward),
    ("후방", DirectionSymbol::Backward),
    ("후면", DirectionSymbol::Backward),
    ("후퇴", DirectionSymbol::Backward),
    ("빼", DirectionSymbol::Backward),
    ("떼", DirectionSymbol::Backward),
    ("위", DirectionSymbol::Up),
    ("위로", DirectionSymbol::Up),
    ("위쪽", DirectionSymbol::Up),
    ("상단", DirectionSymbol::Up),
    ("위방향", DirectionSymbol::Up),
    ("아래", DirectionSymbol::Down),
    ("아래로", DirectionSymbol::Down),
    ("아래쪽", DirectionSymbol::Down),
    ("하단", DirectionSymbol::Down),
    ("아래방향", DirectionSymbol::Down),
    ("밑쪽", DirectionSymbol::Down),
    ("밑", DirectionSymbol::Down),
    ("밑으로", DirectionSymbol::Down),
    ("정지", DirectionSymbol::Halt),
    ("멈춰", DirectionSymbol::Halt),
];

/// The pair of synonym tables driving canonicalization
///
/// Immutable once built. Lookups are read-only and safe from any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    units: AHashMap<String, UnitSymbol>,
    directions: AHashMap<String, DirectionSymbol>,
}

impl Vocabulary {
    /// A vocabulary with no entries (starting point for custom tables)
    pub fn empty() -> Self {
        Self {
            units: AHashMap::new(),
            directions: AHashMap::new(),
        }
    }

    /// The built-in production tables
    pub fn builtin() -> Self {
        let mut vocab = Self::empty();
        for (surface, symbol) in UNIT_SYNONYMS {
            vocab.add_unit(*surface, *symbol);
        }
        for (surface, symbol) in DIRECTION_SYNONYMS {
            vocab.add_direction(*surface, *symbol);
        }
        vocab
    }

    /// Register a surface form for a unit symbol (last insertion wins)
    pub fn add_unit(&mut self, surface: impl Into<String>, symbol: UnitSymbol) {
        self.units.insert(surface.into(), symbol);
    }

    /// Register a surface form for a direction symbol (last insertion wins)
    pub fn add_direction(&mut self, surface: impl Into<String>, symbol: DirectionSymbol) {
        self.directions.insert(surface.into(), symbol);
    }

    /// Look up a token in the unit table
    pub fn unit(&self, token: &str) -> Option<UnitSymbol> {
        self.units.get(token).copied()
    }

    /// Look up a token in the direction table
    pub fn direction(&self, token: &str) -> Option<DirectionSymbol> {
        self.directions.get(token).copied()
    }

    /// Number of unit surface forms
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Number of direction surface forms
    pub fn direction_count(&self) -> usize {
        self.directions.len()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

// === GLOBAL VOCABULARY ACCESS ===

use std::sync::OnceLock;

static VOCABULARY: OnceLock<Vocabulary> = OnceLock::new();

/// Get the process-wide vocabulary (initializes with the built-in tables if not set)
pub fn vocabulary() -> &'static Vocabulary {
    VOCABULARY.get_or_init(Vocabulary::builtin)
}

/// Install a custom process-wide vocabulary (can only be called once)
///
/// Returns Err if a vocabulary was already installed or already initialized
/// through [`vocabulary`].
pub fn set_vocabulary(vocab: Vocabulary) -> Result<(), Vocabulary> {
    VOCABULARY.set(vocab)
}
