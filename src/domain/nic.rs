// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Interface Records
//!
//! [`InterfaceInfo`] is the attribute set of a single host interface as
//! reported by a discovery mechanism. Records are plain data: the only
//! behavior is a handful of derived read-only queries.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::Id;

/// How an interface obtains its addresses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    /// Not reported, or not recognised
    #[default]
    #[serde(rename = "")]
    Unknown,
    Loopback,
    Static,
    Dhcp,
    Manual,
}

impl ConfigType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigType::Unknown => "",
            ConfigType::Loopback => "loopback",
            ConfigType::Static => "static",
            ConfigType::Dhcp => "dhcp",
            ConfigType::Manual => "manual",
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Anything unrecognised maps to [`ConfigType::Unknown`].
impl From<&str> for ConfigType {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "loopback" => ConfigType::Loopback,
            "static" => ConfigType::Static,
            "dhcp" => ConfigType::Dhcp,
            "manual" => ConfigType::Manual,
            _ => ConfigType::Unknown,
        }
    }
}

impl FromStr for ConfigType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Kind of link layer device backing an interface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceType {
    #[default]
    #[serde(rename = "")]
    Unknown,
    Loopback,
    Ethernet,
    #[serde(rename = "802.1q")]
    Vlan,
    Bond,
    Bridge,
}

impl InterfaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceType::Unknown => "",
            InterfaceType::Loopback => "loopback",
            InterfaceType::Ethernet => "ethernet",
            InterfaceType::Vlan => "802.1q",
            InterfaceType::Bond => "bond",
            InterfaceType::Bridge => "bridge",
        }
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Address value as reported by a provider
///
/// Kept as the provider's string; no IP or CIDR parsing happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderAddress(String);

impl ProviderAddress {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProviderAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered addresses; position is significant (primary first).
pub type ProviderAddresses = Vec<ProviderAddress>;

/// Builds [`ProviderAddresses`] preserving argument order.
pub fn new_provider_addresses<I, S>(values: I) -> ProviderAddresses
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(ProviderAddress::new).collect()
}

/// Static route attached to an interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub destination_cidr: String,
    pub gateway_ip: String,
    pub metric: u32,
}

impl Route {
    pub fn new(destination_cidr: impl Into<String>, gateway_ip: impl Into<String>, metric: u32) -> Self {
        Self {
            destination_cidr: destination_cidr.into(),
            gateway_ip: gateway_ip.into(),
            metric,
        }
    }
}

/// A single network interface on a host
///
/// `parent_interface_name` links the record into the host topology: empty
/// marks a root, otherwise it names another record's `interface_name` in
/// the same catalog. The link is not validated.
///
/// # Examples
///
/// ```rust
/// use cim_network_topology::domain::InterfaceInfo;
///
/// let vlan = InterfaceInfo::new("eth0").with_vlan_tag(42);
/// assert_eq!(vlan.actual_interface_name(), "eth0.42");
/// assert!(vlan.is_vlan());
/// assert!(vlan.is_virtual());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceInfo {
    /// Host-assigned ordering key
    pub device_index: u32,
    pub mac_address: String,
    pub provider_id: Id,
    /// Base name, before any VLAN suffix
    pub interface_name: String,
    pub parent_interface_name: String,
    pub interface_type: InterfaceType,
    pub disabled: bool,
    pub no_auto_start: bool,
    pub config_type: ConfigType,
    pub addresses: ProviderAddresses,
    pub dns_servers: ProviderAddresses,
    pub dns_search_domains: Vec<String>,
    pub mtu: u32,
    pub gateway_address: ProviderAddress,
    pub is_default_gateway: bool,
    pub availability_zones: Vec<String>,
    pub routes: Vec<Route>,
    /// 0 means untagged
    pub vlan_tag: u16,
}

impl InterfaceInfo {
    pub fn new(interface_name: impl Into<String>) -> Self {
        Self {
            interface_name: interface_name.into(),
            ..Self::default()
        }
    }

    pub fn with_device_index(mut self, index: u32) -> Self {
        self.device_index = index;
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_interface_name = parent.into();
        self
    }

    pub fn with_vlan_tag(mut self, tag: u16) -> Self {
        self.vlan_tag = tag;
        self
    }

    pub fn with_interface_type(mut self, interface_type: InterfaceType) -> Self {
        self.interface_type = interface_type;
        self
    }

    pub fn with_config_type(mut self, config_type: ConfigType) -> Self {
        self.config_type = config_type;
        self
    }

    pub fn with_addresses(mut self, addresses: ProviderAddresses) -> Self {
        self.addresses = addresses;
        self
    }

    pub fn with_gateway(mut self, address: impl Into<String>) -> Self {
        self.gateway_address = ProviderAddress::new(address);
        self
    }

    pub fn with_availability_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability_zones = zones.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Device name once VLAN tagging is applied: `name` or `name.tag`.
    pub fn actual_interface_name(&self) -> String {
        if self.vlan_tag == 0 {
            self.interface_name.clone()
        } else {
            format!("{}.{}", self.interface_name, self.vlan_tag)
        }
    }

    pub fn is_vlan(&self) -> bool {
        self.vlan_tag != 0
    }

    /// Whether this is a virtual device, using the VLAN tag rule.
    ///
    /// See [`VirtualClassifier`] for plugging in other rules.
    pub fn is_virtual(&self) -> bool {
        self.is_virtual_by(&VlanTagClassifier)
    }

    pub fn is_virtual_by<C: VirtualClassifier + ?Sized>(&self, classifier: &C) -> bool {
        classifier.is_virtual(self)
    }

    pub fn is_root(&self) -> bool {
        self.parent_interface_name.is_empty()
    }

    /// First configured address, if any.
    pub fn primary_address(&self) -> Option<&ProviderAddress> {
        self.addresses.first()
    }
}

/// Decides whether an interface counts as virtual
///
/// Only the VLAN tag rule is established. Classification by device type or
/// naming convention (bridges, bonds) belongs in a separate implementation.
pub trait VirtualClassifier {
    fn is_virtual(&self, info: &InterfaceInfo) -> bool;
}

/// Tagged interfaces are virtual, everything else is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct VlanTagClassifier;

impl VirtualClassifier for VlanTagClassifier {
    fn is_virtual(&self, info: &InterfaceInfo) -> bool {
        info.is_vlan()
    }
}
