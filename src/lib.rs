//! Host network topology for the Composable Information Machine
//!
//! This crate models the interfaces of a single host (physical devices,
//! VLANs, bonds, bridges) and answers the questions provisioning needs:
//! the effective device name of an interface, the order in which a flat
//! interface list must be created or torn down, and which subnets are
//! usable in a given availability zone.

pub mod domain;
pub mod errors;

// Re-export commonly used types
pub use domain::{
    find_subnet_ids_for_availability_zone, Id, InterfaceInfo, InterfaceInfos, SubnetSet,
    TraversalConfig,
};
pub use errors::{HierarchyError, TopologyError, TopologyResult};
