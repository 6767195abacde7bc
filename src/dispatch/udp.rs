//! Fire-and-forget UDP transport to the simulation process

use crate::core::config::EndpointConfig;
use crate::core::error::{Result, WarcryError};
use crate::dispatch::Transport;
use serde_json::Value;
use std::net::UdpSocket;

/// Sends each wire object as one UTF-8 JSON datagram
pub struct UdpTransport {
    socket: UdpSocket,
    endpoint: String,
}

impl UdpTransport {
    /// Bind an ephemeral local socket aimed at the configured endpoint
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        config.validate().map_err(WarcryError::Endpoint)?;
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        Ok(Self {
            socket,
            endpoint: config.endpoint(),
        })
    }
}

impl Transport for UdpTransport {
    fn deliver(&self, wire: &Value) -> Result<()> {
        let payload = wire.to_string();
        let sent = self
            .socket
            .send_to(payload.as_bytes(), self.endpoint.as_str())?;
        tracing::debug!(endpoint = %self.endpoint, bytes = sent, "command datagram sent");
        Ok(())
    }
}
