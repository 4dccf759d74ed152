use std::sync::Arc;

use crate::domain::ports::KeyValueStore;

const HISTORY_KEY: &str = "search_history";
const LAUNCHED_KEY: &str = "hasLaunched";
const HISTORY_CAPACITY: usize = 10;

/// Recent search queries, most recent first, deduplicated and capped,
/// persisted through the key-value store as a JSON string array. Also
/// owns the first-launch flag the app keeps in the same store.
pub struct SearchHistory<S> {
    store: Arc<S>,
}

impl<S: KeyValueStore> SearchHistory<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn entries(&self) -> Vec<String> {
        self.store
            .get(HISTORY_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Record a query: it moves (or is inserted) to the front, and the
    /// oldest entry falls off past capacity. Blank queries are ignored.
    pub fn record(&self, query: &str) -> std::io::Result<()> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        let mut entries = self.entries();
        entries.retain(|entry| entry != trimmed);
        entries.insert(0, trimmed.to_string());
        entries.truncate(HISTORY_CAPACITY);

        let json = serde_json::to_string(&entries)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        self.store.set(HISTORY_KEY, &json)
    }

    pub fn clear(&self) -> std::io::Result<()> {
        self.store.remove(HISTORY_KEY)
    }

    /// Only the literal `"1"` counts as launched; any other stored
    /// value falls back to the first-launch path.
    pub fn first_launch(&self) -> bool {
        self.store.get(LAUNCHED_KEY).as_deref() != Some("1")
    }

    pub fn mark_launched(&self) -> std::io::Result<()> {
        self.store.set(LAUNCHED_KEY, "1")
    }
}
