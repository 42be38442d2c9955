// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Active MQTT-SN gateway tracking
//!
//! Gateways announce themselves over the mesh with periodic ADVERTISE and
//! GWINFO messages. The protocol engine feeds every observed advertisement
//! into [`ActiveGatewayList::add`]; a periodic timer (owned by the caller,
//! ideally at least as frequent as the shortest keepalive in use) drives
//! [`ActiveGatewayList::evict_expired`]. A presentation layer can render the
//! current records through [`ActiveGatewayList::iter`].

pub mod info;
pub mod registry;

pub use info::{GatewayId, GatewayInfo};
pub use registry::ActiveGatewayList;
