//! Command interpretation pipeline
//!
//! Converts spoken-token sequences into simulation commands:
//! tokens -> canonicalize -> Canonicalization -> resolve -> Command -> wire form

pub mod canonical;
pub mod resolver;
pub mod wire;

pub use canonical::{canonicalize, canonicalize_with, Canonicalization};
pub use resolver::{interpret, interpret_with, resolve};
pub use wire::{to_wire_form, to_wire_json};
