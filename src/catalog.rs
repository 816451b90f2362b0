//! Catalog list state: the fetched index and the filtered/sorted view over it

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::nav::MountId;
use crate::state::LoadPhase;

/// One row of the bulk index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySummary {
    pub name: String,
    pub url: String,
}

impl EntrySummary {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    ByName,
    /// Accepted but not applied: ordering by type needs one fetch per entry.
    ByType,
}

impl SortMode {
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::ByName => "name",
            SortMode::ByType => "type",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    /// Mount of the list screen that owns this state.
    pub mount: MountId,
    pub phase: LoadPhase,
    /// Index exactly as fetched.
    pub canonical: Vec<EntrySummary>,
    /// What the list shows.
    pub view: Vec<EntrySummary>,
    pub query_text: String,
    pub sort_mode: SortMode,
    /// False while the view is in fetch order, even though `sort_mode`
    /// holds a default.
    #[serde(default)]
    pub sort_applied: bool,
    pub cursor: usize,
}

impl CatalogState {
    pub fn new(mount: MountId) -> Self {
        Self {
            mount,
            ..Self::default()
        }
    }

    /// Replaces the index wholesale. The view is reset to the unfiltered,
    /// unsorted fetch result, so the query is cleared with it.
    pub fn replace_canonical(&mut self, entries: Vec<EntrySummary>) {
        self.view = entries.clone();
        self.canonical = entries;
        self.query_text.clear();
        self.sort_applied = false;
        self.phase = LoadPhase::Loaded;
        self.cursor = 0;
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
        self.view = filter_entries(&self.canonical, &self.query_text);
        self.sort_applied = false;
        self.clamp_cursor();
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        self.sort_applied = true;
        match mode {
            SortMode::ByName => sort_by_name(&mut self.view),
            SortMode::ByType => {}
        }
    }

    /// Exact, case-insensitive lookup against the current view.
    pub fn resolve(&self, query: &str) -> Option<&EntrySummary> {
        let needle = query.to_lowercase();
        self.view
            .iter()
            .find(|entry| entry.name.to_lowercase() == needle)
    }

    /// A tapped row becomes the query. Does not navigate.
    pub fn select_entry(&mut self, name: &str) {
        self.set_query_text(name);
    }

    pub fn set_cursor(&mut self, index: usize) -> bool {
        let bounded = index.min(self.view.len().saturating_sub(1));
        if bounded == self.cursor {
            return false;
        }
        self.cursor = bounded;
        true
    }

    pub fn highlighted(&self) -> Option<&EntrySummary> {
        self.view.get(self.cursor)
    }

    /// Status label for the ordering the view is actually in.
    pub fn sort_label(&self) -> &'static str {
        if self.sort_applied {
            self.sort_mode.label()
        } else {
            "none"
        }
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.view.len() {
            self.cursor = 0;
        }
    }
}

pub fn filter_entries(entries: &[EntrySummary], text: &str) -> Vec<EntrySummary> {
    let needle = text.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Stable, so equal names keep their relative order.
pub fn sort_by_name(entries: &mut [EntrySummary]) {
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
