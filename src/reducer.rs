//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::detail::DetailState;
use crate::effect::Effect;
use crate::nav::{DetailParams, Route};
use crate::state::{AppState, LoadPhase, Notice};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init | Action::CatalogLoad => {
            if state.catalog.phase == LoadPhase::Loading {
                return DispatchResult::unchanged();
            }
            state.catalog.phase = LoadPhase::Loading;
            DispatchResult::changed_with(Effect::FetchIndex {
                mount: state.catalog.mount,
            })
        }

        Action::CatalogDidLoad { mount, entries } => {
            if !state.catalog_is_live(mount) {
                tracing::debug!(%mount, "dropping index for unmounted list screen");
                return DispatchResult::unchanged();
            }
            state.catalog.replace_canonical(entries);
            DispatchResult::changed()
        }

        Action::CatalogDidError { mount, error } => {
            if !state.catalog_is_live(mount) {
                return DispatchResult::unchanged();
            }
            tracing::debug!(%mount, %error, "index fetch failed, keeping previous list");
            state.catalog.phase = LoadPhase::Failed;
            DispatchResult::changed()
        }

        Action::CatalogQueryChange(text) => {
            state.catalog.set_query_text(text);
            DispatchResult::changed()
        }

        Action::CatalogSortSet(mode) => {
            state.catalog.set_sort_mode(mode);
            DispatchResult::changed()
        }

        Action::CatalogSearchSubmit(query) => {
            if state.nav.on_detail() {
                return DispatchResult::unchanged();
            }
            let Some(name) = state.catalog.resolve(&query).map(|entry| entry.name.clone()) else {
                tracing::info!(%query, "no pokemon in view matches search");
                state.notice = Some(Notice::NotFound { query });
                return DispatchResult::changed();
            };
            open_detail(state, name)
        }

        Action::CatalogEntrySelect(name) => {
            state.catalog.select_entry(&name);
            DispatchResult::changed()
        }

        Action::CatalogCursorMove(index) => {
            if state.catalog.set_cursor(index) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::DetailDidLoad { mount, detail } => match state.live_detail_mut(mount) {
            Some(screen) => {
                screen.record = DataResource::Loaded(detail);
                DispatchResult::changed()
            }
            None => {
                tracing::debug!(%mount, "dropping record for unmounted detail screen");
                DispatchResult::unchanged()
            }
        },

        Action::DetailDidError { mount, error } => match state.live_detail_mut(mount) {
            Some(screen) => {
                screen.record = DataResource::Failed(error);
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },

        Action::NavigateBack => {
            let Some(popped) = state.nav.pop() else {
                return DispatchResult::unchanged();
            };
            if state
                .detail
                .as_ref()
                .is_some_and(|detail| detail.mount == popped.id)
            {
                state.detail = None;
            }
            DispatchResult::changed()
        }

        Action::NoticeDismiss => {
            if state.notice.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::UiTerminalResize(width, height) => {
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Hands the matched name to navigation and starts the detail fetch.
fn open_detail(state: &mut AppState, pokemon_name: String) -> DispatchResult<Effect> {
    let params = DetailParams { pokemon_name };
    let mount = state.nav.push(Route::PokemonDetail(params.clone()));
    let mut detail = DetailState::mount(mount, params);
    let effect = detail.load();
    state.detail = Some(detail);
    match effect {
        Some(effect) => DispatchResult::changed_with(effect),
        None => DispatchResult::changed(),
    }
}
