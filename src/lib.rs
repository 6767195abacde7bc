//! WarCry Command - Korean voice-command interpretation for the battle simulation

pub mod command;
pub mod core;
pub mod dispatch;
pub mod vocab;
