// src/view/hierarchy.rs

//! Department hierarchy reconstruction.
//!
//! The API returns departments as a flat list where each record carries at
//! most one `super_department` pointer. The builder reassembles the org
//! chart as a forest in two O(n) passes over an id-indexed map.

use std::collections::HashMap;

use crate::models::{DepartmentNode, DepartmentRecord};

/// Build the org-chart forest from a flat department list.
///
/// Every input record appears in the output exactly once, either as a root
/// or under exactly one parent. A record whose parent is absent from the
/// input set becomes a root rather than being dropped; the same applies to a
/// record naming itself as parent. Duplicate identifiers resolve
/// last-write-wins: earlier records with a reused id are superseded. Child
/// order within a parent equals the relative input order of those children.
pub fn build_department_forest(records: &[DepartmentRecord]) -> Vec<DepartmentNode> {
    // First pass: index each id by its winning (last-seen) position.
    let mut index: HashMap<i64, usize> = HashMap::with_capacity(records.len());
    for (pos, record) in records.iter().enumerate() {
        index.insert(record.id, pos);
    }

    // Second pass, in input order: attach each winning record to its parent,
    // or to the root list when the parent does not resolve.
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots: Vec<usize> = Vec::new();

    for (pos, record) in records.iter().enumerate() {
        if index[&record.id] != pos {
            continue; // superseded by a later record with the same id
        }

        let parent_pos = record
            .super_department
            .filter(|&parent_id| parent_id != record.id)
            .and_then(|parent_id| index.get(&parent_id).copied());

        match parent_pos {
            Some(parent_pos) => children[parent_pos].push(pos),
            None => roots.push(pos),
        }
    }

    roots
        .iter()
        .map(|&pos| build_node(records, &children, pos))
        .collect()
}

/// Materialize the node at `pos` with its full subtree.
fn build_node(records: &[DepartmentRecord], children: &[Vec<usize>], pos: usize) -> DepartmentNode {
    DepartmentNode {
        record: records[pos].clone(),
        children: children[pos]
            .iter()
            .map(|&child| build_node(records, children, child))
            .collect(),
    }
}
