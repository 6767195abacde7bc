//! Delivery pipeline from utterance to simulation endpoint
//!
//! Composes the tokenizer collaborator, the interpretation core, and a
//! transport. Collaborator failures are logged here; they never reach the
//! pure core and never escape the pipeline.

pub mod udp;

pub use udp::UdpTransport;

use crate::command::resolver::interpret;
use crate::command::wire::to_wire_form;
use crate::core::error::Result;
use crate::core::types::Command;
use serde_json::Value;

/// Splits utterance text into tokens
///
/// Seam for the external part-of-speech tagger; the core only ever sees the
/// token sequence this produces.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Plain whitespace splitting, for pre-segmented text and manual entry
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Best-effort delivery of one wire object
///
/// Fire and forget: no acknowledgment, no retry.
pub trait Transport {
    fn deliver(&self, wire: &Value) -> Result<()>;
}

/// One-utterance pipeline: tokenize, interpret, encode, deliver
pub struct Dispatcher<T: Tokenizer, S: Transport> {
    tokenizer: T,
    transport: S,
}

impl<T: Tokenizer, S: Transport> Dispatcher<T, S> {
    pub fn new(tokenizer: T, transport: S) -> Self {
        Self {
            tokenizer,
            transport,
        }
    }

    /// Interpret one utterance and hand its wire form to the transport
    ///
    /// Delivery failures are logged and swallowed; the resolved command is
    /// returned either way.
    pub fn handle_utterance(&self, text: &str) -> Command {
        let tokens = self.tokenizer.tokenize(text);
        let command = interpret(&tokens);
        tracing::debug!(?command, token_count = tokens.len(), "utterance resolved");

        let wire = to_wire_form(&command);
        if let Err(e) = self.transport.deliver(&wire) {
            tracing::warn!("command delivery failed: {}", e);
        }

        command
    }
}
