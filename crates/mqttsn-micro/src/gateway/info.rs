// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Gateway records

use core::fmt;
use core::net::Ipv6Addr;

/// MQTT-SN gateway ID (one octet on the wire)
pub type GatewayId = u8;

/// Information about an advertised MQTT-SN gateway
///
/// Equality is structural: two records match only if every field matches,
/// timestamps included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayInfo {
    pub(crate) gateway_id: GatewayId,
    pub(crate) address: Ipv6Addr,
    pub(crate) last_seen_ms: u32,
    pub(crate) duration_ms: u32,
}

impl GatewayInfo {
    /// Create a new record
    ///
    /// # Arguments
    ///
    /// * `gateway_id` - ID the gateway advertised
    /// * `address` - IPv6 address the advertisement came from
    /// * `last_seen_ms` - Device timestamp (ms) of the advertisement
    /// * `duration_ms` - Keepalive window (ms) before the gateway goes stale
    pub const fn new(
        gateway_id: GatewayId,
        address: Ipv6Addr,
        last_seen_ms: u32,
        duration_ms: u32,
    ) -> Self {
        Self {
            gateway_id,
            address,
            last_seen_ms,
            duration_ms,
        }
    }

    /// Gateway ID
    pub const fn gateway_id(&self) -> GatewayId {
        self.gateway_id
    }

    /// IPv6 address the gateway advertised from
    pub const fn address(&self) -> Ipv6Addr {
        self.address
    }

    /// Device timestamp (ms) of the last advertisement
    pub const fn last_seen_ms(&self) -> u32 {
        self.last_seen_ms
    }

    /// Keepalive duration (ms) before the gateway is considered stale
    pub const fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

impl fmt::Display for GatewayInfo {
    // One gateway per line, the format the CLI prints
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gateway {}: gateway_id={}", self.address, self.gateway_id)
    }
}
