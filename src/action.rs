//! Actions - user intents and fetch results

use serde::{Deserialize, Serialize};

use crate::catalog::{EntrySummary, SortMode};
use crate::detail::EntryDetail;
use crate::nav::MountId;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    /// Mount the list screen and fetch the index
    Init,

    // ===== Catalog (list screen) =====
    /// Re-run the index fetch for the mounted list screen
    CatalogLoad,
    CatalogDidLoad {
        mount: MountId,
        entries: Vec<EntrySummary>,
    },
    CatalogDidError {
        mount: MountId,
        error: String,
    },
    /// Query text edited; refilters the view
    CatalogQueryChange(String),
    CatalogSortSet(SortMode),
    /// Exact lookup in the view, then open the detail screen
    CatalogSearchSubmit(String),
    /// A row was picked; its name becomes the query
    CatalogEntrySelect(String),
    CatalogCursorMove(usize),

    // ===== Detail screen =====
    DetailDidLoad {
        mount: MountId,
        detail: EntryDetail,
    },
    DetailDidError {
        mount: MountId,
        error: String,
    },

    // ===== Navigation / notices =====
    NavigateBack,
    NoticeDismiss,

    // ===== UI =====
    UiTerminalResize(u16, u16),
    /// Force a re-render (cursor movement in the query input)
    Render,

    Quit,
}
