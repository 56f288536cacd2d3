use std::collections::HashSet;

/// Entity kind produced by a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Region,
    Sector,
    System,
    Star,
    Planet,
    Moon,
    Asteroid,
    SpaceStation,
    Hyperlane,
}

/// Column data type
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    /// Stable identifier of the row itself
    Key,
    Text,
    /// Permissive number; unparseable values become unknown
    Number,
    /// Truthy unless empty, `0` or `false`
    Flag,
    /// Identifier of a row in another source
    Link,
    /// Present in the file but never read
    Unused,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Key => write!(f, "key"),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Number => write!(f, "number"),
            ColumnType::Flag => write!(f, "flag"),
            ColumnType::Link => write!(f, "link"),
            ColumnType::Unused => write!(f, "unused"),
        }
    }
}

/// Column definition, in file order
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
}

impl Column {
    pub const fn key(name: &'static str) -> Self {
        Self {
            name,
            col_type: ColumnType::Key,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            col_type: ColumnType::Text,
        }
    }

    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            col_type: ColumnType::Number,
        }
    }

    pub const fn flag(name: &'static str) -> Self {
        Self {
            name,
            col_type: ColumnType::Flag,
        }
    }

    pub const fn link(name: &'static str) -> Self {
        Self {
            name,
            col_type: ColumnType::Link,
        }
    }

    pub const fn unused(name: &'static str) -> Self {
        Self {
            name,
            col_type: ColumnType::Unused,
        }
    }
}

/// Foreign key reference
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_source: &'static str,
}

impl ForeignKey {
    pub const fn new(column: &'static str, references_source: &'static str) -> Self {
        Self {
            column,
            references_source,
        }
    }
}

/// Source schema definition
#[derive(Debug, Clone)]
pub struct SourceSchema {
    pub name: &'static str,
    pub kind: SourceKind,
    pub source_file: &'static str,
    pub delimiter: char,
    pub columns: &'static [Column],
    pub foreign_keys: &'static [ForeignKey],
    /// Fields past the declared columns are links into this source
    pub trailing_links: Option<&'static str>,
}

impl SourceSchema {
    /// Get all sources this source depends on (FK parents)
    pub fn dependencies(&self) -> HashSet<&'static str> {
        self.foreign_keys
            .iter()
            .map(|fk| fk.references_source)
            .chain(self.trailing_links)
            .collect()
    }

    /// Position of a named column within a row
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == column)
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::sources::{HYPERLANES, SYSTEMS};

    #[test]
    fn test_position_follows_declared_order() {
        assert_eq!(SYSTEMS.position("name"), Some(0));
        assert_eq!(SYSTEMS.position("x"), Some(3));
        assert_eq!(SYSTEMS.position("priority"), Some(8));
        assert_eq!(SYSTEMS.position("missing"), None);
    }

    #[test]
    fn test_trailing_links_count_as_dependency() {
        let deps = HYPERLANES.dependencies();
        assert!(deps.contains("systems"));
        assert_eq!(deps.len(), 1);
    }
}
