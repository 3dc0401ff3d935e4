//! # Record types
//!
//! Core types for the memory bank.
//!
//! ## Category
//!
//! Closed set of classification buckets. Every record belongs to exactly one
//! category, chosen at creation; the three category lists partition all
//! records. Grouped output always uses the fixed order development, mindset,
//! struggles.
//!
//! ## MemoryValue
//!
//! The record payload: a non-empty `description` headline plus an ordered
//! list of free-form `details` (examples, milestones). Zero details is valid.
//!
//! ## MemoryItem
//!
//! An immutable journaled entry: generated v4 UUID, creation timestamp
//! (ISO-8601 on the wire via chrono's RFC 3339 serde), and the value.
//! There is no update path; editing is modeled as delete + recreate.

use aura_core::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the three fixed personal-memory classification buckets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Struggles,
    Development,
    Mindset,
}

impl Category {
    /// Fixed grouping order for "all categories" output.
    pub const DISPLAY_ORDER: [Category; 3] =
        [Category::Development, Category::Mindset, Category::Struggles];

    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Struggles => "struggles",
            Category::Development => "development",
            Category::Mindset => "mindset",
        }
    }

    /// Parses the lowercase name. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "struggles" => Some(Category::Struggles),
            "development" => Some(Category::Development),
            "mindset" => Some(Category::Mindset),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category dimension for filter and search queries: one category or all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// The payload of a memory record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryValue {
    /// The record's headline. Non-empty after trimming.
    pub description: String,
    /// Supporting examples or milestones. May be empty.
    pub details: Vec<String>,
}

impl MemoryValue {
    /// Validates and normalizes raw input: the description is trimmed and
    /// must be non-empty; detail entries are trimmed and empty ones dropped.
    pub fn new(description: &str, details: &[String]) -> Result<Self, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let details = details
            .iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();
        Ok(Self {
            description: description.to_string(),
            details,
        })
    }
}

/// A single immutable journaled entry under one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryItem {
    /// Unique identifier; opaque, no ordering semantics beyond uniqueness.
    pub id: Uuid,
    /// Creation time. Immutable.
    pub timestamp: DateTime<Utc>,
    /// The record payload.
    pub value: MemoryValue,
}

impl MemoryItem {
    /// Creates a new item with a generated UUID and the current time.
    pub fn new(value: MemoryValue) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_rejects_empty_description() {
        assert_eq!(
            MemoryValue::new("", &[]),
            Err(ValidationError::EmptyDescription)
        );
        assert_eq!(
            MemoryValue::new("   \t ", &[]),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_value_trims_and_drops_empty_details() {
        let value = MemoryValue::new(
            "  Morning routine  ",
            &["  wake at 6 ".to_string(), "   ".to_string(), "run".to_string()],
        )
        .unwrap();
        assert_eq!(value.description, "Morning routine");
        assert_eq!(value.details, vec!["wake at 6", "run"]);
    }

    #[test]
    fn test_value_with_no_details_is_valid() {
        let value = MemoryValue::new("Kept my journal", &[]).unwrap();
        assert!(value.details.is_empty());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Development).unwrap();
        assert_eq!(json, "\"development\"");
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Category::Development);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("mindset"), Some(Category::Mindset));
        assert_eq!(Category::parse("Mindset"), None);
        assert_eq!(Category::parse("other"), None);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Struggles));
        assert!(CategoryFilter::Only(Category::Mindset).matches(Category::Mindset));
        assert!(!CategoryFilter::Only(Category::Mindset).matches(Category::Struggles));
    }
}
