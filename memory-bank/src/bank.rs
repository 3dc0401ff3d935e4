//! # Memory bank store
//!
//! [`MemoryBank`] owns the full record set behind a `RwLock` and writes the
//! serialized whole through to the key-value store on every mutation. Reads
//! return snapshots by clone; the data set is bounded and user-scale, so
//! linear scans are fine and no indexing is attempted.
//!
//! ## Persistence contract
//!
//! The whole bank is one JSON document under [`storage::KEY_MEMORY_BANK`].
//! [`MemoryBank::load`] never fails: an absent key yields the empty default,
//! and corrupt stored bytes degrade to the same default with a warning.

use std::sync::Arc;

use aura_core::{AuraError, Result};
use serde::{Deserialize, Serialize};
use storage::{KvStore, KEY_MEMORY_BANK};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::types::{Category, CategoryFilter, MemoryItem, MemoryValue};

/// The full record set: one newest-first list per category. The three lists
/// partition all records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MemoryBankData {
    pub struggles: Vec<MemoryItem>,
    pub development: Vec<MemoryItem>,
    pub mindset: Vec<MemoryItem>,
}

impl MemoryBankData {
    /// The list for one category, newest first.
    pub fn items(&self, category: Category) -> &[MemoryItem] {
        match category {
            Category::Struggles => &self.struggles,
            Category::Development => &self.development,
            Category::Mindset => &self.mindset,
        }
    }

    fn items_mut(&mut self, category: Category) -> &mut Vec<MemoryItem> {
        match category {
            Category::Struggles => &mut self.struggles,
            Category::Development => &mut self.development,
            Category::Mindset => &mut self.mindset,
        }
    }

    /// Total record count across all categories.
    pub fn len(&self) -> usize {
        self.struggles.len() + self.development.len() + self.mindset.len()
    }

    /// Returns true if no category holds any record.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The owned store object: in-memory record set plus write-through
/// persistence. Mutations are atomic behind the lock; reads are snapshots.
pub struct MemoryBank {
    data: RwLock<MemoryBankData>,
    kv: Arc<dyn KvStore>,
}

impl MemoryBank {
    /// Loads the bank from the key-value store. Absent or corrupt stored
    /// data yields the empty default; this constructor never fails.
    pub async fn load(kv: Arc<dyn KvStore>) -> Self {
        let data = match kv.get(KEY_MEMORY_BANK).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(data) => data,
                Err(e) => {
                    warn!(error = %e, "Corrupt stored memory bank, starting empty");
                    MemoryBankData::default()
                }
            },
            Ok(None) => MemoryBankData::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read stored memory bank, starting empty");
                MemoryBankData::default()
            }
        };

        Self {
            data: RwLock::new(data),
            kv,
        }
    }

    /// Creates a new immutable record under `category`, prepends it to the
    /// category list (newest first), persists the full bank, and returns the
    /// created item. Validation failure leaves the bank untouched.
    pub async fn add_record(
        &self,
        category: Category,
        description: &str,
        details: &[String],
    ) -> Result<MemoryItem> {
        let value = MemoryValue::new(description, details)?;
        let item = MemoryItem::new(value);

        // The write lock stays held across the persist so overlapping calls
        // cannot write snapshots to the store out of order.
        let mut data = self.data.write().await;
        data.items_mut(category).insert(0, item.clone());
        self.persist(&data).await?;
        drop(data);

        info!(category = %category, id = %item.id, "Added memory record");
        Ok(item)
    }

    /// Snapshot of the full record set.
    pub async fn query_all(&self) -> MemoryBankData {
        self.data.read().await.clone()
    }

    /// Records matching the category filter, grouped by category in the
    /// fixed order development, mindset, struggles; each group keeps its
    /// newest-first order.
    pub async fn filter_by_category(&self, filter: CategoryFilter) -> Vec<(Category, MemoryItem)> {
        let data = self.data.read().await;
        let mut out = Vec::new();
        for category in Category::DISPLAY_ORDER {
            if !filter.matches(category) {
                continue;
            }
            for item in data.items(category) {
                out.push((category, item.clone()));
            }
        }
        out
    }

    /// Case-insensitive substring search over description and details,
    /// intersected with the category filter. An empty query matches every
    /// record the filter admits.
    pub async fn search(&self, query: &str, filter: CategoryFilter) -> Vec<(Category, MemoryItem)> {
        let candidates = self.filter_by_category(filter).await;
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|(_, item)| item_matches(item, &needle))
            .collect()
    }

    /// Total record count. Test and monitoring surface.
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    /// Returns true if the bank holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn persist(&self, data: &MemoryBankData) -> Result<()> {
        let json = serde_json::to_string(data)
            .map_err(|e| AuraError::Storage(format!("serialize memory bank: {}", e)))?;
        self.kv
            .set(KEY_MEMORY_BANK, &json)
            .await
            .map_err(|e| AuraError::Storage(e.to_string()))
    }
}

/// True if the lowercased description or any lowercased detail contains
/// `needle` (already lowercased).
fn item_matches(item: &MemoryItem, needle: &str) -> bool {
    item.value.description.to_lowercase().contains(needle)
        || item
            .value
            .details
            .iter()
            .any(|d| d.to_lowercase().contains(needle))
}
