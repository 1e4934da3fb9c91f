// Copyright (c) 2025 - Cowboy AI, Inc.
//! Interface Catalog and Hierarchy Traversal
//!
//! A host's interfaces arrive as a flat list where each record names its
//! parent by string. [`InterfaceInfos`] keeps that list in discovery order
//! and reconstructs the tree on demand.
//!
//! # Ordering
//!
//! Catalog order is the only tie-break anywhere in this module:
//!
//! - [`InterfaceInfos::children`] returns matches in catalog order
//! - roots are visited in catalog order
//! - siblings are visited in catalog order
//!
//! # Traversal
//!
//! ```text
//! br-bond0            visit order: br-bond0, bond0, eth0, eth1, eth2
//! └── bond0
//!     ├── eth0
//!     └── eth1
//! eth2
//! ```
//!
//! A record whose parent names nothing in the catalog is never reached and
//! never treated as a root. Use [`InterfaceInfos::unreachable`] to find such
//! records explicitly.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::ops::Index;
use tracing::{debug, trace};

use super::InterfaceInfo;
use crate::errors::{HierarchyError, TopologyError, TopologyResult};

/// Limits applied while walking the interface hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Maximum number of levels, counting roots as level 1
    pub max_depth: usize,
}

impl TraversalConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Ordered collection of the interfaces found on one host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceInfos(Vec<InterfaceInfo>);

impl InterfaceInfos {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InterfaceInfo> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[InterfaceInfo] {
        &self.0
    }

    pub fn push(&mut self, info: InterfaceInfo) {
        self.0.push(info);
    }

    pub fn into_inner(self) -> Vec<InterfaceInfo> {
        self.0
    }

    /// Decode a catalog from a JSON array of records.
    pub fn from_json(json: &str) -> TopologyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> TopologyResult<String> {
        serde_json::to_string_pretty(self).map_err(TopologyError::serialization)
    }

    /// Records whose parent is `parent_name`, in catalog order.
    ///
    /// The empty string selects the roots.
    pub fn children(&self, parent_name: &str) -> Vec<&InterfaceInfo> {
        self.0
            .iter()
            .filter(|info| info.parent_interface_name == parent_name)
            .collect()
    }

    /// First record named `interface_name`, in catalog order.
    pub fn get_by_name(&self, interface_name: &str) -> Option<&InterfaceInfo> {
        self.0
            .iter()
            .find(|info| info.interface_name == interface_name)
    }

    /// Depth-first, pre-order walk of the hierarchy with default limits.
    ///
    /// `visit` is called for a parent before any of its descendants. A root's
    /// whole subtree is finished before the next root starts. The first error
    /// returned by `visit` stops the walk and is returned as-is.
    pub fn iter_hierarchy<'a, E, F>(&'a self, visit: F) -> Result<(), E>
    where
        F: FnMut(&'a InterfaceInfo) -> Result<(), E>,
        E: From<HierarchyError>,
    {
        self.iter_hierarchy_with(&TraversalConfig::default(), visit)
    }

    /// Like [`iter_hierarchy`](Self::iter_hierarchy) with explicit limits.
    ///
    /// # Errors
    ///
    /// - whatever `visit` returns
    /// - [`HierarchyError::CycleDetected`] when parent links loop back on
    ///   themselves; a loop found before the walk starts means nothing is
    ///   visited, a loop found while descending stops below its ancestor
    /// - [`HierarchyError::DepthLimitExceeded`] past `config.max_depth`
    pub fn iter_hierarchy_with<'a, E, F>(
        &'a self,
        config: &TraversalConfig,
        mut visit: F,
    ) -> Result<(), E>
    where
        F: FnMut(&'a InterfaceInfo) -> Result<(), E>,
        E: From<HierarchyError>,
    {
        find_parent_cycle(&self.0)?;

        let mut walk = Walk {
            index: ChildIndex::build(&self.0),
            open: Vec::new(),
            max_depth: config.max_depth,
            visited: 0,
        };

        walk.descend("", &mut visit)?;

        debug!(
            visited = walk.visited,
            total = self.0.len(),
            "Interface hierarchy traversal complete"
        );
        Ok(())
    }

    /// Records in provisioning order: parents before children.
    pub fn hierarchy_order(&self) -> Result<Vec<&InterfaceInfo>, HierarchyError> {
        let mut order = Vec::with_capacity(self.0.len());
        self.iter_hierarchy(|info| {
            order.push(info);
            Ok::<(), HierarchyError>(())
        })?;
        Ok(order)
    }

    /// Records in teardown order: children before parents.
    pub fn teardown_order(&self) -> Result<Vec<&InterfaceInfo>, HierarchyError> {
        let mut order = self.hierarchy_order()?;
        order.reverse();
        Ok(order)
    }

    /// Records a hierarchy walk never reaches, in catalog order.
    ///
    /// Covers dangling parent references. Parent cycles are listed too,
    /// although a walk over such a catalog fails with
    /// [`HierarchyError::CycleDetected`].
    pub fn unreachable(&self) -> Vec<&InterfaceInfo> {
        let index = ChildIndex::build(&self.0);
        let mut reached = HashSet::new();
        let mut queue: VecDeque<usize> = index.positions("").iter().copied().collect();

        while let Some(pos) = queue.pop_front() {
            if !reached.insert(pos) {
                continue;
            }
            let name = self.0[pos].interface_name.as_str();
            if !name.is_empty() {
                queue.extend(index.positions(name));
            }
        }

        self.0
            .iter()
            .enumerate()
            .filter(|(pos, _)| !reached.contains(pos))
            .map(|(_, info)| info)
            .collect()
    }
}

/// Follows every record's parent links up to a root or a dangling name.
///
/// Names resolve to their first record in catalog order. A chain that meets
/// a name it already passed is a cycle. Chains ending at a name no record
/// carries are left alone.
fn find_parent_cycle(infos: &[InterfaceInfo]) -> Result<(), HierarchyError> {
    let mut by_name: HashMap<&str, &InterfaceInfo> = HashMap::new();
    for info in infos {
        by_name.entry(info.interface_name.as_str()).or_insert(info);
    }

    // Names already known to lead to a root or a dangling parent
    let mut settled: HashSet<&str> = HashSet::new();

    for info in infos {
        let mut chain: Vec<&str> = Vec::new();
        let mut current = info;

        loop {
            let name = current.interface_name.as_str();
            if settled.contains(name) {
                break;
            }
            if chain.contains(&name) {
                return Err(HierarchyError::CycleDetected {
                    interface_name: name.to_string(),
                });
            }
            chain.push(name);

            let parent = current.parent_interface_name.as_str();
            if parent.is_empty() {
                break;
            }
            match by_name.get(parent) {
                Some(next) => current = *next,
                None => break,
            }
        }

        settled.extend(chain);
    }

    Ok(())
}

/// Parent name to child positions, each list in catalog order.
struct ChildIndex<'a> {
    infos: &'a [InterfaceInfo],
    children: HashMap<&'a str, Vec<usize>>,
}

impl<'a> ChildIndex<'a> {
    fn build(infos: &'a [InterfaceInfo]) -> Self {
        let mut children: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (pos, info) in infos.iter().enumerate() {
            children
                .entry(info.parent_interface_name.as_str())
                .or_default()
                .push(pos);
        }
        Self { infos, children }
    }

    fn positions(&self, parent: &str) -> &[usize] {
        self.children.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }
}

struct Walk<'a> {
    index: ChildIndex<'a>,
    /// Names of the ancestors currently being descended
    open: Vec<&'a str>,
    max_depth: usize,
    visited: usize,
}

impl<'a> Walk<'a> {
    fn descend<E, F>(&mut self, parent: &str, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&'a InterfaceInfo) -> Result<(), E>,
        E: From<HierarchyError>,
    {
        let infos = self.index.infos;
        let positions = self.index.positions(parent).to_vec();

        for pos in positions {
            let info = &infos[pos];
            let name = info.interface_name.as_str();

            if self.open.contains(&name) {
                return Err(HierarchyError::CycleDetected {
                    interface_name: name.to_string(),
                }
                .into());
            }
            if self.open.len() >= self.max_depth {
                return Err(HierarchyError::DepthLimitExceeded {
                    interface_name: name.to_string(),
                    limit: self.max_depth,
                }
                .into());
            }

            trace!(
                interface = name,
                parent = info.parent_interface_name.as_str(),
                depth = self.open.len(),
                "Visiting interface"
            );
            visit(info)?;
            self.visited += 1;

            // "" means "no parent", so an unnamed record cannot have children.
            if name.is_empty() {
                continue;
            }

            self.open.push(name);
            self.descend(name, visit)?;
            self.open.pop();
        }

        Ok(())
    }
}

impl Index<usize> for InterfaceInfos {
    type Output = InterfaceInfo;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<InterfaceInfo>> for InterfaceInfos {
    fn from(value: Vec<InterfaceInfo>) -> Self {
        Self(value)
    }
}

impl FromIterator<InterfaceInfo> for InterfaceInfos {
    fn from_iter<T: IntoIterator<Item = InterfaceInfo>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for InterfaceInfos {
    type Item = InterfaceInfo;
    type IntoIter = std::vec::IntoIter<InterfaceInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a InterfaceInfos {
    type Item = &'a InterfaceInfo;
    type IntoIter = std::slice::Iter<'a, InterfaceInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
