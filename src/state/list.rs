//! Resource list controller shared by every collection screen.
//!
//! Each list page owns a `ListState<T>` behind an `RwSignal`: the page
//! starts a fetch with [`ListState::begin`], hands the result back through
//! [`ListState::finish`], and marks teardown with [`ListState::deactivate`].
//! Fetch epochs make late results from a superseded or torn-down fetch
//! harmless: the network request itself is never aborted, only its result
//! is discarded.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

/// A record that exposes its designated filter fields as strings.
///
/// Each collection filters over a fixed subset of columns rather than the
/// whole record; numeric fields participate via their decimal form.
pub trait Searchable {
    fn search_fields(&self) -> Vec<String>;
}

/// State held by one resource list: the fetched collection, the in-flight
/// flag, and the last categorical error message.
#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    epoch: u64,
    active: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            epoch: 0,
            active: true,
        }
    }
}

impl<T: Clone> ListState<T> {
    /// Start a fetch: raise the loading flag, clear any stale error, and
    /// return the epoch the eventual result must present to be applied.
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.epoch += 1;
        self.epoch
    }

    /// Apply a fetch outcome. Results from a superseded epoch or from after
    /// teardown are dropped without touching any state. On success the held
    /// collection is replaced wholesale; on failure it is left as-is and the
    /// error message is surfaced. The loading flag clears either way.
    pub fn finish(&mut self, epoch: u64, result: Result<Vec<T>, String>) {
        if !self.active || epoch != self.epoch {
            return;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }

    /// Teardown signal: any fetch resolving after this is ignored.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Records whose designated fields contain `query` case-insensitively.
    /// A blank query returns the whole collection.
    pub fn filtered(&self, query: &str) -> Vec<T>
    where
        T: Searchable,
    {
        filter_items(&self.items, query).into_iter().cloned().collect()
    }
}

/// Substring filter over the designated fields of each record.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
