// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fixed-capacity registry of active gateways
//!
//! Wraps a [`StaticList`] of [`GatewayInfo`] records. Each advertisement
//! refreshes the matching record in place or inserts a new one; a periodic
//! sweep evicts every record whose keepalive window has passed.

use core::net::Ipv6Addr;

use crate::error::{Error, Result};
use crate::gateway::info::{GatewayId, GatewayInfo};
use crate::list::{Handle, StaticList};
use crate::time::Clock;

/// Registry of currently active gateways
///
/// # Design
///
/// - Single execution context: no locking, no blocking, every call runs to
///   completion in O(`N`)
/// - `N` slots, no heap; a full registry rejects new gateways with
///   [`Error::NoBufs`] and leaves existing records untouched
/// - The clock is read once per [`add`](Self::add) and once per
///   [`evict_expired`](Self::evict_expired)
///
/// # Example
///
/// ```ignore
/// let mut gateways: ActiveGatewayList<ManualClock, MAX_GATEWAY_COUNT> =
///     ActiveGatewayList::new(ManualClock::new(0));
///
/// gateways.add(2, advertisement_source, 900_000)?;
///
/// // From the periodic timer:
/// gateways.evict_expired()?;
/// ```
pub struct ActiveGatewayList<C: Clock, const N: usize> {
    /// Backing slot storage
    gateways: StaticList<GatewayInfo, N>,

    /// Platform clock
    clock: C,
}

impl<C: Clock, const N: usize> ActiveGatewayList<C, N> {
    /// Create an empty registry reading time from `clock`
    pub fn new(clock: C) -> Self {
        Self {
            gateways: StaticList::new(),
            clock,
        }
    }

    /// Record a gateway advertisement
    ///
    /// If the gateway is already tracked, its address, last-seen timestamp
    /// and keepalive duration are overwritten in place, so a repeated
    /// advertiser never consumes more than one slot. Otherwise a new record
    /// is inserted.
    ///
    /// # Errors
    ///
    /// [`Error::NoBufs`] if a new record is needed and every slot is taken.
    /// Existing records are unaffected; the caller may simply drop the
    /// advertisement.
    pub fn add(&mut self, gateway_id: GatewayId, address: Ipv6Addr, duration_ms: u32) -> Result<()> {
        let now_ms = self.clock.now_ms();
        if let Some(handle) = self.find_handle(gateway_id) {
            if let Some(info) = self.gateways.get_mut(handle) {
                info.address = address;
                info.last_seen_ms = now_ms;
                info.duration_ms = duration_ms;
                log::debug!(
                    "[GWLIST] Refreshed gateway_id={} (keepalive {} ms)",
                    gateway_id,
                    duration_ms
                );
                return Ok(());
            }
        }
        self.gateways
            .add(GatewayInfo::new(gateway_id, address, now_ms, duration_ms))?;
        log::debug!(
            "[GWLIST] Tracking new gateway_id={} ({}/{} slots used)",
            gateway_id,
            self.gateways.len(),
            N
        );
        Ok(())
    }

    /// Find a tracked gateway by ID
    ///
    /// Linear scan from the most recent insertion; the first match wins.
    pub fn find(&self, gateway_id: GatewayId) -> Option<&GatewayInfo> {
        self.find_handle(gateway_id)
            .and_then(|handle| self.gateways.get(handle))
    }

    /// Evict every gateway whose keepalive window has passed
    ///
    /// A single timestamp taken at entry judges the whole pass, so records
    /// expiring mid-sweep are treated consistently. A record expires only
    /// strictly after `last_seen_ms + duration_ms`; at the exact deadline it
    /// survives. Timestamps wrap at 32 bits; sweeps are assumed frequent and
    /// keepalive durations short relative to the wrap period, so wraparound
    /// is not special-cased.
    ///
    /// Returns the number of evicted records (0 is a successful sweep).
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the backing store rejects a handle observed
    /// during this same pass. That cannot happen while the registry
    /// invariants hold; the sweep aborts without touching the remaining
    /// records.
    pub fn evict_expired(&mut self) -> Result<usize> {
        if self.gateways.is_empty() {
            return Ok(0);
        }
        let now_ms = self.clock.now_ms();
        let mut evicted = 0;
        let mut cursor = self.gateways.head();
        while let Some(handle) = cursor {
            // Capture the successor before a removal unlinks this node
            cursor = self.gateways.next(handle);
            let expired = self
                .gateways
                .get(handle)
                .map_or(false, |info| {
                    now_ms > info.last_seen_ms.wrapping_add(info.duration_ms)
                });
            if expired {
                if let Err(e) = self.gateways.remove(handle) {
                    log::error!("[GWLIST] Lost track of a gateway slot, aborting sweep");
                    return Err(e);
                }
                evicted += 1;
            }
        }
        if evicted > 0 {
            log::debug!("[GWLIST] Evicted {} expired gateways", evicted);
        }
        Ok(evicted)
    }

    /// Number of tracked gateways
    pub fn len(&self) -> usize {
        self.gateways.len()
    }

    /// Check if no gateway is tracked
    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty()
    }

    /// Drop every tracked gateway
    pub fn clear(&mut self) {
        self.gateways.clear();
    }

    /// Iterate over the tracked gateways, most recent insertion first
    pub fn iter(&self) -> impl Iterator<Item = &GatewayInfo> {
        self.gateways.iter()
    }

    /// Copy the current records into a bounded vector
    ///
    /// The snapshot outlives subsequent registry mutations, for callers that
    /// hand the records to a display or command layer.
    #[cfg(feature = "heapless")]
    pub fn snapshot(&self) -> heapless::Vec<GatewayInfo, N> {
        let mut records = heapless::Vec::new();
        for info in self.iter() {
            // The vector capacity matches the registry capacity
            let _ = records.push(*info);
        }
        records
    }

    /// Borrow the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutably borrow the clock
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    fn find_handle(&self, gateway_id: GatewayId) -> Option<Handle> {
        let mut cursor = self.gateways.head();
        while let Some(handle) = cursor {
            match self.gateways.get(handle) {
                Some(info) if info.gateway_id == gateway_id => return Some(handle),
                _ => cursor = self.gateways.next(handle),
            }
        }
        None
    }
}
