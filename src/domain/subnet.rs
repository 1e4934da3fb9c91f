// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subnet Identifier Sets and Zone Lookup

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use super::Id;
use crate::errors::{TopologyError, TopologyResult};

/// Deduplicating set of subnet identifiers
///
/// Members are kept in identifier order, so every enumeration is
/// repeatable. [`SubnetSet::sorted_values`] is the canonical form for
/// comparisons.
///
/// # Examples
///
/// ```rust
/// use cim_network_topology::domain::{Id, SubnetSet};
///
/// let set = SubnetSet::new(["foo", "foo", "bar"]);
/// assert_eq!(set.size(), 2);
/// assert_eq!(set.sorted_values(), vec![Id::from("bar"), Id::from("foo")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubnetSet(BTreeSet<Id>);

impl SubnetSet {
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    /// Inserting an existing member is a no-op.
    pub fn add(&mut self, id: impl Into<Id>) {
        self.0.insert(id.into());
    }

    pub fn remove(&mut self, id: &Id) -> bool {
        self.0.remove(id)
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.0.contains(id)
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.0.iter()
    }

    /// Every member once, in the same order on every call.
    pub fn values(&self) -> Vec<Id> {
        self.0.iter().cloned().collect()
    }

    /// Every member once, ascending.
    pub fn sorted_values(&self) -> Vec<Id> {
        self.0.iter().cloned().collect()
    }

    pub fn union(&self, other: &SubnetSet) -> SubnetSet {
        Self(self.0.union(&other.0).cloned().collect())
    }

    pub fn intersection(&self, other: &SubnetSet) -> SubnetSet {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Members of `self` not in `other`.
    pub fn difference(&self, other: &SubnetSet) -> SubnetSet {
        Self(self.0.difference(&other.0).cloned().collect())
    }
}

impl<T: Into<Id>> FromIterator<T> for SubnetSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Id>> Extend<T> for SubnetSet {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

/// Subnets usable in `zone_name`, ascending by identifier.
///
/// A subnet matches when its zone list contains `zone_name` exactly.
///
/// # Errors
///
/// [`TopologyError::NotFound`] when nothing matches, including when
/// `subnets_to_zones` is empty.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use cim_network_topology::domain::{find_subnet_ids_for_availability_zone, Id};
///
/// let mut subnets = HashMap::new();
/// subnets.insert(Id::from("other"), vec!["aaa".to_string(), "foo".to_string()]);
/// subnets.insert(Id::from("bar"), vec!["foo".to_string(), "baz".to_string()]);
///
/// let ids = find_subnet_ids_for_availability_zone("foo", &subnets).unwrap();
/// assert_eq!(ids, vec![Id::from("bar"), Id::from("other")]);
/// ```
pub fn find_subnet_ids_for_availability_zone(
    zone_name: &str,
    subnets_to_zones: &HashMap<Id, Vec<String>>,
) -> TopologyResult<Vec<Id>> {
    let mut matched: Vec<Id> = subnets_to_zones
        .iter()
        .filter(|(_, zones)| zones.iter().any(|zone| zone == zone_name))
        .map(|(id, _)| id.clone())
        .collect();

    debug!(
        zone = zone_name,
        candidates = subnets_to_zones.len(),
        matched = matched.len(),
        "Resolved subnets for availability zone"
    );

    if matched.is_empty() {
        return Err(TopologyError::not_found(format!(
            "subnets associated with zone {:?}",
            zone_name
        )));
    }

    matched.sort();
    Ok(matched)
}
