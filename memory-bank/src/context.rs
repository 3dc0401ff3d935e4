//! # Context formatting
//!
//! Renders the full memory bank into the natural-language context block sent
//! with every assistant request. The rendering is deterministic for a given
//! record set (same records, same order in, same string out), so assistant
//! exchanges stay reproducible under mocked backends.
//!
//! ## Format
//!
//! - Header line, then one section per non-empty category in the fixed order
//!   development, mindset, struggles.
//! - Each item renders as `- {description}`, its details indented beneath.
//! - An entirely empty bank renders [`EMPTY_CONTEXT`] instead of an empty
//!   string, so the assistant always receives a well-formed context.

use crate::bank::MemoryBankData;
use crate::types::Category;

/// Placeholder context for an empty bank. Never send an empty string.
pub const EMPTY_CONTEXT: &str = "The user has not recorded any memories yet.";

/// First line of a non-empty context block.
pub const CONTEXT_HEADER: &str = "What the user has recorded in their memory bank:";

/// Section title for one category.
pub fn section_title(category: Category) -> &'static str {
    match category {
        Category::Development => "Growth and development:",
        Category::Mindset => "Mindset:",
        Category::Struggles => "Struggles:",
    }
}

/// Builds the context block for the assistant from a bank snapshot.
pub fn format_context(data: &MemoryBankData) -> String {
    if data.is_empty() {
        return EMPTY_CONTEXT.to_string();
    }

    let mut out = String::new();
    out.push_str(CONTEXT_HEADER);
    out.push('\n');

    for category in Category::DISPLAY_ORDER {
        let items = data.items(category);
        if items.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(section_title(category));
        out.push('\n');
        for item in items {
            out.push_str("- ");
            out.push_str(&item.value.description);
            out.push('\n');
            for detail in &item.value.details {
                out.push_str("  * ");
                out.push_str(detail);
                out.push('\n');
            }
        }
    }

    out.trim_end().to_string()
}
