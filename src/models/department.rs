// src/models/department.rs

//! Department records and the derived org-chart tree.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::locale::Locale;

/// A department as returned by the content API.
///
/// Departments form a forest through `super_department` parent pointers; a
/// record with no parent (or a parent missing from the fetched set) is a
/// root of the org chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentRecord {
    /// Unique department identifier
    pub id: i64,

    /// Display name (Chinese)
    pub name: String,

    /// English display name, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,

    /// Identifier of the parent department, absent for roots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_department: Option<i64>,
}

impl DepartmentRecord {
    /// Load department records from a JSON file (an API response capture).
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Locale-resolved display name.
    pub fn display_name(&self, locale: Locale) -> &str {
        locale.resolve_field(Some(&self.name), self.english_name.as_deref())
    }
}

/// A department together with its child departments.
///
/// Built fresh on every call to
/// [`build_department_forest`](crate::view::build_department_forest); child
/// order equals the relative order of those children in the input.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DepartmentNode {
    /// The department this node wraps
    #[serde(flatten)]
    pub record: DepartmentRecord,

    /// Sub-departments, in input order
    pub children: Vec<DepartmentNode>,
}

impl DepartmentNode {
    /// Count this node and every descendant.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DepartmentNode::subtree_size)
            .sum::<usize>()
    }
}
