// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host Network Topology Domain Models
//!
//! Plain in-memory models for the interfaces of a single host and the
//! subnets reachable from each availability zone. Everything here operates
//! on records supplied by the caller; nothing is discovered, validated
//! against an operating system, or persisted.
//!
//! # Records and Collections
//!
//! - [`InterfaceInfo`] - one interface with its VLAN tag and parent link
//! - [`InterfaceInfos`] - ordered catalog with parent/child queries and
//!   hierarchy traversal
//! - [`SubnetSet`] - deduplicating set of subnet [`Id`]s
//!
//! # Lookups
//!
//! - [`find_subnet_ids_for_availability_zone`] - reverse index from a zone
//!   to the subnets spanning it

pub mod catalog;
pub mod id;
pub mod nic;
pub mod subnet;

pub use catalog::{InterfaceInfos, TraversalConfig};
pub use id::Id;
pub use nic::{
    new_provider_addresses, ConfigType, InterfaceInfo, InterfaceType, ProviderAddress,
    ProviderAddresses, Route, VirtualClassifier, VlanTagClassifier,
};
pub use subnet::{find_subnet_ids_for_availability_zone, SubnetSet};
