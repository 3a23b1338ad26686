//! Tool Catalog
//!
//! Tools are immutable capability descriptors drawn from a fixed catalog
//! supplied at startup. Teams and agents never create tools; they only
//! reference catalog entries.

use serde::{Deserialize, Serialize};

/// A named capability an agent may use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Stable identifier, unique within the catalog (e.g. `"web-search"`)
    pub id: String,
    /// Display name
    pub name: String,
    /// What the tool does
    pub description: String,
}

impl Tool {
    /// Create a new catalog entry
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The built-in tool catalog, in display order
#[must_use]
pub fn builtin_catalog() -> Vec<Tool> {
    vec![
        Tool::new("web-search", "Web Search", "Search the web for information"),
        Tool::new("code-interpreter", "Code Interpreter", "Write and execute code"),
        Tool::new("file-manager", "File Manager", "Read and write files"),
    ]
}

/// Look up a catalog entry by id
#[must_use]
pub fn find_tool<'a>(catalog: &'a [Tool], tool_id: &str) -> Option<&'a Tool> {
    catalog.iter().find(|t| t.id == tool_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_entries() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].id, "web-search");
        assert_eq!(catalog[1].id, "code-interpreter");
        assert_eq!(catalog[2].id, "file-manager");
    }

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = builtin_catalog();
        for (i, tool) in catalog.iter().enumerate() {
            assert!(!catalog[i + 1..].iter().any(|t| t.id == tool.id));
        }
    }

    #[test]
    fn test_find_tool() {
        let catalog = builtin_catalog();
        assert_eq!(find_tool(&catalog, "file-manager").unwrap().name, "File Manager");
        assert!(find_tool(&catalog, "missing").is_none());
    }
}
