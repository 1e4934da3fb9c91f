// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Hierarchy Traversal
//!
//! Catalogs are generated as well-formed forests (every parent exists, no
//! cycles) and then shuffled, so catalog order is arbitrary with respect to
//! the tree shape.

use cim_network_topology::domain::{InterfaceInfo, InterfaceInfos};
use proptest::prelude::*;
use std::collections::HashMap;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate a shuffled forest of 1..40 interfaces.
///
/// Interface `i` may only hang below an interface `j < i`, which rules out
/// cycles by construction.
fn forest() -> impl Strategy<Value = InterfaceInfos> {
    (1usize..40)
        .prop_flat_map(|n| {
            (0..n)
                .map(|i| {
                    if i == 0 {
                        Just(None::<usize>).boxed()
                    } else {
                        proptest::option::of(0..i).boxed()
                    }
                })
                .collect::<Vec<_>>()
        })
        .prop_map(|parents| {
            parents
                .into_iter()
                .enumerate()
                .map(|(i, parent)| {
                    let info = InterfaceInfo::new(format!("if{}", i)).with_device_index(i as u32);
                    match parent {
                        Some(p) => info.with_parent(format!("if{}", p)),
                        None => info,
                    }
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
        .prop_map(InterfaceInfos::from)
}

fn visit_order(interfaces: &InterfaceInfos) -> Vec<String> {
    interfaces
        .hierarchy_order()
        .expect("generated forests are acyclic")
        .into_iter()
        .map(|info| info.interface_name.clone())
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Every record of a well-formed forest is visited exactly once
    #[test]
    fn prop_visits_every_record_once(interfaces in forest()) {
        let order = visit_order(&interfaces);

        let mut sorted = order.clone();
        sorted.sort();
        sorted.dedup();

        prop_assert_eq!(order.len(), interfaces.len());
        prop_assert_eq!(sorted.len(), interfaces.len(), "No record may be visited twice");
        prop_assert!(interfaces.unreachable().is_empty());
    }

    /// Property: A parent is visited strictly before each of its children
    #[test]
    fn prop_parent_before_child(interfaces in forest()) {
        let order = visit_order(&interfaces);
        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(pos, name)| (name.as_str(), pos))
            .collect();

        for info in &interfaces {
            if info.is_root() {
                continue;
            }
            let parent = position[info.parent_interface_name.as_str()];
            let child = position[info.interface_name.as_str()];
            prop_assert!(
                parent < child,
                "{} visited before its parent {}",
                info.interface_name,
                info.parent_interface_name
            );
        }
    }

    /// Property: Siblings are visited in catalog order
    #[test]
    fn prop_siblings_in_catalog_order(interfaces in forest()) {
        let order = visit_order(&interfaces);

        for parent in std::iter::once("").chain(interfaces.iter().map(|i| i.interface_name.as_str())) {
            let expected: Vec<&str> = interfaces
                .children(parent)
                .into_iter()
                .map(|i| i.interface_name.as_str())
                .collect();
            let visited: Vec<&str> = order
                .iter()
                .map(String::as_str)
                .filter(|name| expected.contains(name))
                .collect();
            prop_assert_eq!(visited, expected);
        }
    }

    /// Property: A root's subtree finishes before the next root starts
    #[test]
    fn prop_subtrees_are_contiguous(interfaces in forest()) {
        let order = visit_order(&interfaces);
        let parent_of: HashMap<&str, &str> = interfaces
            .iter()
            .map(|i| (i.interface_name.as_str(), i.parent_interface_name.as_str()))
            .collect();

        let root_of = |name: &str| {
            let mut current = name;
            while let Some(parent) = parent_of.get(current).filter(|p| !p.is_empty()) {
                current = *parent;
            }
            current.to_string()
        };

        let mut roots: Vec<String> = order.iter().map(|name| root_of(name.as_str())).collect();
        roots.dedup();

        let expected: Vec<String> = interfaces
            .children("")
            .into_iter()
            .map(|i| i.interface_name.clone())
            .collect();
        prop_assert_eq!(roots, expected);
    }

    /// Property: Children("") is exactly the roots, in catalog order
    #[test]
    fn prop_roots_filter(interfaces in forest()) {
        let roots = interfaces.children("");
        let expected: Vec<&InterfaceInfo> = interfaces.iter().filter(|i| i.is_root()).collect();
        prop_assert_eq!(roots, expected);
    }

    /// Property: Teardown is the exact reverse of provisioning
    #[test]
    fn prop_teardown_reverses_hierarchy(interfaces in forest()) {
        let mut forward = interfaces.hierarchy_order().unwrap();
        let teardown = interfaces.teardown_order().unwrap();
        forward.reverse();
        prop_assert_eq!(forward, teardown);
    }
}
