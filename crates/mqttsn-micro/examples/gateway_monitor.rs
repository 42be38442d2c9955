// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Gateway Monitor Example
//!
//! Simulates a node observing MQTT-SN gateway advertisements and shows the
//! registry evicting stale gateways as simulated time moves forward.
//!
//! ## Usage
//!
//! ```sh
//! cargo run --example gateway_monitor --features std
//! ```

use std::net::Ipv6Addr;

use mqttsn_micro::{ActiveGatewayList, Clock, ManualClock, Result, MAX_GATEWAY_COUNT};

fn print_gateways<C: Clock, const N: usize>(gateways: &ActiveGatewayList<C, N>) {
    println!("t={} ms, {} active:", gateways.clock().now_ms(), gateways.len());
    for info in gateways.iter() {
        println!("  {}", info);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut gateways: ActiveGatewayList<ManualClock, MAX_GATEWAY_COUNT> =
        ActiveGatewayList::new(ManualClock::new(0));

    // Two gateways advertise at boot, one with a short keepalive
    gateways.add(1, Ipv6Addr::new(0xfd11, 0x22, 0, 0, 0, 0, 0, 0x1), 900_000)?;
    gateways.add(2, Ipv6Addr::new(0xfd11, 0x22, 0, 0, 0, 0, 0, 0x2), 30_000)?;
    print_gateways(&gateways);

    // Gateway 1 keeps advertising; gateway 2 goes quiet
    gateways.clock_mut().set(20_000);
    gateways.add(1, Ipv6Addr::new(0xfd11, 0x22, 0, 0, 0, 0, 0, 0x1), 900_000)?;

    // 31 s in, gateway 2 has missed its keepalive window
    gateways.clock_mut().set(31_000);
    gateways.evict_expired()?;
    print_gateways(&gateways);

    // Much later the refreshed gateway 1 expires too
    gateways.clock_mut().set(921_000);
    gateways.evict_expired()?;
    print_gateways(&gateways);

    Ok(())
}
