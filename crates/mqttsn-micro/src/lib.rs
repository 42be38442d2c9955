// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # MQTT-SN Micro - Embedded Gateway Tracking
//!
//! A `no_std` library for tracking active MQTT-SN gateways on
//! resource-constrained wireless nodes (Thread, 6LoWPAN, 802.15.4-class
//! networks).
//!
//! Gateways announce themselves periodically over an unreliable network.
//! Each advertisement carries a keepalive duration; a gateway that is not
//! heard from within that duration is stale and gets evicted by a periodic
//! sweep.
//!
//! ## Design Constraints
//!
//! - **No heap allocations** (const generics for fixed slot arrays)
//! - **Single execution context** (no locks, no blocking, no I/O)
//! - **Bounded time** (every operation is O(capacity))
//! - **`no_std` compatible**
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------+
//! |  Protocol engine / CLI (external)       |
//! +-----------------------------------------+
//!           v                    ^
//! +-----------------------------------------+
//! |  ActiveGatewayList (upsert/sweep/find)  |
//! +-----------------------------------------+
//!           v                    ^
//! +-----------------------------------------+
//! |  StaticList (fixed slots, handles)      |
//! +-----------------------------------------+
//!
//! Clock (trait) --> read once per upsert and once per sweep
//! ```
//!
//! ## Feature Flags
//!
//! - `std` -- Enable std (host testing, `StdClock`, examples)
//! - `heapless` -- Bounded gateway snapshots via `heapless::Vec`

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Error types for MQTT-SN Micro
pub mod error;

/// Active gateway tracking (records and registry)
pub mod gateway;

/// Fixed-capacity linked storage
pub mod list;

/// Millisecond clock abstraction
pub mod time;

// Re-exports for convenience
pub use crate::error::{Error, Result};
pub use crate::gateway::{ActiveGatewayList, GatewayId, GatewayInfo};
pub use crate::list::{Handle, StaticList};
pub use crate::time::{Clock, ManualClock};

#[cfg(feature = "std")]
pub use crate::time::StdClock;

/// Recommended maximum number of tracked gateways
///
/// Embedded peer lists run single-digit to low tens of entries; removal cost
/// grows linearly with this, so keep it small.
pub const MAX_GATEWAY_COUNT: usize = 8;

/// Version of MQTT-SN Micro
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
