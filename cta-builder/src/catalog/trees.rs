//! Engagement trees and departments

use serde::{Deserialize, Serialize};

/// Category matching every CTA
pub const ALL_CATEGORIES: &str = "all";

/// Trees grouped by category plus the department list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeCatalog {
    /// Tree groups
    #[serde(default)]
    pub trees: Vec<TreeCategory>,
    /// Departments
    #[serde(default)]
    pub departments: Vec<Department>,
}

/// Trees available for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeCategory {
    /// Category name (e.g. `sales`)
    pub category: String,
    /// Trees in this category
    #[serde(default)]
    pub options: Vec<TreeOption>,
}

/// A single engagement tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeOption {
    /// Tree identifier written into the launcher
    pub id: String,
    /// Display label
    #[serde(default)]
    pub label: String,
}

/// Department entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Numeric department, or the `custom` keyword
    pub id: DepartmentId,
    /// Display label
    pub label: String,
    /// Category this department belongs to, or `all`
    pub category: String,
}

/// Department identifier as written in `trees.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepartmentId {
    /// Department number
    Number(u32),
    /// Keyword such as `custom`
    Keyword(String),
}

impl DepartmentId {
    /// Whether this entry asks the user for a custom number
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Keyword(keyword) if keyword == "custom")
    }
}

impl TreeCatalog {
    /// Trees of a category sorted by id; empty for unknown categories
    #[must_use]
    pub fn trees_for_category(&self, category: &str) -> Vec<TreeOption> {
        let mut options = self
            .trees
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.options.clone())
            .unwrap_or_default();
        options.sort_by(|a, b| a.id.cmp(&b.id));
        options
    }

    /// Departments of a category, including the ones shared by all categories
    #[must_use]
    pub fn departments_for_category(&self, category: &str) -> Vec<&Department> {
        self.departments
            .iter()
            .filter(|dept| dept.category == category || dept.category == ALL_CATEGORIES)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TreeCatalog {
        serde_json::from_str(
            r#"{
                "trees": [
                    { "category": "sales", "options": [
                        { "id": "zeta", "label": "Z" },
                        { "id": "alpha", "label": "A" }
                    ]}
                ],
                "departments": [
                    { "id": 1, "label": "Sales", "category": "sales" },
                    { "id": 2, "label": "Trade", "category": "trade" },
                    { "id": "custom", "label": "Custom", "category": "all" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_trees_sorted_by_id() {
        let ids: Vec<_> = catalog()
            .trees_for_category("sales")
            .into_iter()
            .map(|tree| tree.id)
            .collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(catalog().trees_for_category("service").is_empty());
    }

    #[test]
    fn test_departments_include_all_category() {
        let catalog = catalog();
        let depts = catalog.departments_for_category("sales");
        assert_eq!(depts.len(), 2);
        assert_eq!(depts[0].id, DepartmentId::Number(1));
        assert!(depts[1].id.is_custom());
    }
}
