//! Category list management.

use serde::{Deserialize, Serialize};

/// Synthetic filter value matching every category.
pub const ALL_CATEGORY: &str = "All";

/// Flat ordered list of category names.
///
/// The list always contains [`ALL_CATEGORY`] as its first entry; it is
/// a filter value, not a real category, and cannot be removed or moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryList {
    names: Vec<String>,
}

impl Default for CategoryList {
    fn default() -> Self {
        Self {
            names: [ALL_CATEGORY, "Uncategorized", "Work", "Personal", "Ideas", "Shopping"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CategoryList {
    /// Build a list from persisted names, restoring the leading
    /// [`ALL_CATEGORY`] entry if the stored data lacks it.
    pub fn from_names(names: Vec<String>) -> Self {
        let mut list = Self { names };
        if list.names.first().map(String::as_str) != Some(ALL_CATEGORY) {
            list.names.retain(|n| n != ALL_CATEGORY);
            list.names.insert(0, ALL_CATEGORY.to_string());
        }
        list
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Add a category. Whitespace is trimmed; empty and duplicate names
    /// are rejected.
    pub fn add(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.names.push(trimmed.to_string());
        true
    }

    /// Remove a category. The synthetic filter entry stays.
    pub fn remove(&mut self, name: &str) -> bool {
        if name == ALL_CATEGORY {
            return false;
        }
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Reorder a category to a new index. Index 0 is reserved for the
    /// filter entry.
    pub fn move_to(&mut self, name: &str, index: usize) -> bool {
        if name == ALL_CATEGORY || index == 0 || index >= self.names.len() {
            return false;
        }
        let Some(from) = self.names.iter().position(|n| n == name) else {
            return false;
        };
        let name = self.names.remove(from);
        self.names.insert(index.min(self.names.len()), name);
        true
    }

    /// Whether a note with `category` passes the `filter` value.
    pub fn matches(filter: &str, category: &str) -> bool {
        filter == ALL_CATEGORY || filter == category
    }
}
