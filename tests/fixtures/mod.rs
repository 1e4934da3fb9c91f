// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-network-topology
//!
//! Deterministic host layouts shared by the integration tests. Catalog order
//! is deliberate in every fixture because traversal order depends on it.

#![allow(dead_code)]

use cim_network_topology::domain::{
    new_provider_addresses, ConfigType, InterfaceInfo, InterfaceInfos, InterfaceType, Route,
};

/// Bridge over a two-port bond, plus a standalone NIC.
///
/// ```text
/// br-bond0
/// └── bond0
///     ├── eth0
///     └── eth1
/// eth2
/// ```
pub fn bonded_host() -> InterfaceInfos {
    InterfaceInfos::from(vec![
        InterfaceInfo::new("br-bond0").with_device_index(0),
        InterfaceInfo::new("eth2").with_device_index(1),
        InterfaceInfo::new("bond0")
            .with_device_index(2)
            .with_parent("br-bond0"),
        InterfaceInfo::new("eth0").with_device_index(3).with_parent("bond0"),
        InterfaceInfo::new("eth1").with_device_index(4).with_parent("bond0"),
    ])
}

/// Host as a discovery agent would report it, children listed first.
pub const DISCOVERED_HOST_JSON: &str = r#"[
    {
        "device_index": 3,
        "interface_name": "eth0",
        "parent_interface_name": "br-eth0",
        "interface_type": "802.1q",
        "vlan_tag": 100,
        "config_type": "static",
        "addresses": ["10.100.0.5/24"],
        "gateway_address": "10.100.0.1",
        "availability_zones": ["zone-a"],
        "routes": [
            {"destination_cidr": "10.200.0.0/16", "gateway_ip": "10.100.0.254", "metric": 10}
        ]
    },
    {
        "device_index": 0,
        "interface_name": "br-eth0",
        "interface_type": "bridge",
        "config_type": "dhcp",
        "mtu": 9000
    },
    {
        "device_index": 1,
        "interface_name": "lo",
        "interface_type": "loopback",
        "config_type": "loopback",
        "addresses": ["127.0.0.1"]
    }
]"#;

pub fn static_vlan() -> InterfaceInfo {
    InterfaceInfo::new("eth0")
        .with_device_index(3)
        .with_parent("br-eth0")
        .with_interface_type(InterfaceType::Vlan)
        .with_vlan_tag(100)
        .with_config_type(ConfigType::Static)
        .with_addresses(new_provider_addresses(["10.100.0.5/24"]))
        .with_gateway("10.100.0.1")
        .with_availability_zones(["zone-a"])
        .with_route(Route::new("10.200.0.0/16", "10.100.0.254", 10))
}
