//! Application state - single source of truth

use serde::{Deserialize, Serialize};
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

use crate::catalog::CatalogState;
use crate::detail::DetailState;
use crate::nav::NavStack;

/// Lifecycle shared by both screens. `Failed` is terminal and renders the
/// same as `Loading`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl LoadPhase {
    /// Whether the screen should show its loading indicator.
    pub fn shows_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading | LoadPhase::Failed)
    }
}

/// Blocking message for the user, rendered by the host as a modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    NotFound { query: String },
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::NotFound { .. } => "Not found",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::NotFound { .. } => "Pokemon not found!".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    pub terminal_size: (u16, u16),
    pub nav: NavStack,
    pub catalog: CatalogState,
    /// Present only while the detail screen is mounted.
    pub detail: Option<DetailState>,
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        let nav = NavStack::default();
        let catalog = CatalogState::new(nav.root());
        Self {
            terminal_size: (80, 24),
            nav,
            catalog,
            detail: None,
            notice: None,
        }
    }
}

impl AppState {
    /// Detail state for `mount`, if that screen is still on the stack.
    pub fn live_detail_mut(&mut self, mount: crate::nav::MountId) -> Option<&mut DetailState> {
        if !self.nav.is_mounted(mount) {
            return None;
        }
        self.detail.as_mut().filter(|detail| detail.mount == mount)
    }

    pub fn catalog_is_live(&self, mount: crate::nav::MountId) -> bool {
        self.catalog.mount == mount && self.nav.is_mounted(mount)
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Catalog")
                .entry("phase", ron_string(&self.catalog.phase))
                .entry("canonical", ron_string(&self.catalog.canonical.len()))
                .entry("view", ron_string(&self.catalog.view.len()))
                .entry("query", ron_string(&self.catalog.query_text))
                .entry("sort", ron_string(&self.catalog.sort_mode))
                .entry("sorted", ron_string(&self.catalog.sort_applied))
                .entry("cursor", ron_string(&self.catalog.cursor)),
            DebugSection::new("Navigation")
                .entry("depth", ron_string(&self.nav.depth()))
                .entry("screen", ron_string(&self.nav.current().route))
                .entry("mount", ron_string(&self.nav.current().id))
                .entry("notice", ron_string(&self.notice)),
            DebugSection::new("Detail")
                .entry(
                    "name",
                    ron_string(
                        &self
                            .detail
                            .as_ref()
                            .map(|detail| detail.params.pokemon_name.clone()),
                    ),
                )
                .entry(
                    "loaded",
                    ron_string(
                        &self
                            .detail
                            .as_ref()
                            .is_some_and(|detail| detail.record.is_loaded()),
                    ),
                ),
        ]
    }
}
