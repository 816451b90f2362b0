//! Render tests using RenderHarness and the store harness

use pokedex::{
    action::Action,
    catalog::{EntrySummary, SortMode},
    components::{
        CatalogScreen, CatalogScreenProps, Component, DetailScreen, DetailScreenProps,
        NoticeModal, NoticeModalProps, LOADING_TEXT,
    },
    detail::EntryDetail,
    effect::Effect,
    reducer::reducer,
    state::AppState,
};
use tui_dispatch::testing::*;
use tui_dispatch::EffectStore;

fn render_catalog(state: &AppState) -> String {
    let mut render = RenderHarness::new(120, 24);
    let mut screen = CatalogScreen::new();
    render.render_to_string_plain(|frame| {
        let props = CatalogScreenProps {
            catalog: &state.catalog,
            is_focused: true,
        };
        screen.render(frame, frame.area(), props);
    })
}

fn render_detail(state: &AppState) -> String {
    let mut render = RenderHarness::new(80, 20);
    let mut screen = DetailScreen::new();
    render.render_to_string_plain(|frame| {
        let props = DetailScreenProps {
            detail: state.detail.as_ref(),
            is_focused: true,
        };
        screen.render(frame, frame.area(), props);
    })
}

fn loaded_state(names: &[&str]) -> AppState {
    let mut state = AppState::default();
    let mount = state.catalog.mount;
    let _ = reducer(&mut state, Action::Init);
    let _ = reducer(
        &mut state,
        Action::CatalogDidLoad {
            mount,
            entries: names
                .iter()
                .map(|name| EntrySummary::new(*name, format!("/pokemon/{name}/")))
                .collect(),
        },
    );
    state
}

#[test]
fn test_catalog_shows_loading_before_index() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut screen = CatalogScreen::new();
    harness.dispatch_collect(Action::Init);

    let output = harness.render_plain(120, 24, |frame, area, state| {
        let props = CatalogScreenProps {
            catalog: &state.catalog,
            is_focused: true,
        };
        screen.render(frame, area, props);
    });
    assert!(
        output.contains(LOADING_TEXT),
        "Loading indicator should be visible:\n{output}"
    );
}

#[test]
fn test_catalog_failed_index_keeps_loading_indicator() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let mount = store.state().catalog.mount;
    store.dispatch(Action::Init);
    store.dispatch(Action::CatalogDidError {
        mount,
        error: "offline".into(),
    });

    let output = render_catalog(store.state());
    assert!(output.contains(LOADING_TEXT), "{output}");
    assert!(!output.contains("offline"), "{output}");
}

#[test]
fn test_catalog_renders_filtered_view() {
    let mut store = EffectStore::new(
        loaded_state(&["bulbasaur", "charmander", "squirtle"]),
        reducer,
    );
    store.dispatch(Action::CatalogQueryChange("char".into()));

    let output = render_catalog(store.state());
    assert!(output.contains("charmander"), "{output}");
    assert!(!output.contains("bulbasaur"), "{output}");
    assert!(!output.contains("squirtle"), "{output}");
    assert!(output.contains("1/3"), "view/canonical counter:\n{output}");
}

#[test]
fn test_catalog_sort_label_follows_view_order() {
    let mut store = EffectStore::new(loaded_state(&["squirtle", "bulbasaur"]), reducer);

    let output = render_catalog(store.state());
    assert!(output.contains("sort: none"), "fetch order is unsorted:\n{output}");

    store.dispatch(Action::CatalogSortSet(SortMode::ByName));
    let output = render_catalog(store.state());
    assert!(output.contains("sort: name"), "{output}");

    store.dispatch(Action::CatalogQueryChange("b".into()));
    let output = render_catalog(store.state());
    assert!(output.contains("sort: none"), "filtering resets order:\n{output}");
}

#[test]
fn test_detail_renders_after_load() {
    let mut store = EffectStore::new(loaded_state(&["bulbasaur"]), reducer);
    let result = store.dispatch(Action::CatalogSearchSubmit("bulbasaur".into()));
    let Some(Effect::FetchEntry { mount, .. }) = result.effects.first().cloned() else {
        panic!("expected detail fetch, got {:?}", result.effects);
    };

    let output = render_detail(store.state());
    assert!(output.contains(LOADING_TEXT), "{output}");

    store.dispatch(Action::DetailDidLoad {
        mount,
        detail: EntryDetail {
            name: "bulbasaur".into(),
            height: 7,
            weight: 69,
            type_names: vec!["grass".into(), "poison".into()],
            image_url: None,
        },
    });

    let output = render_detail(store.state());
    assert!(output.contains("bulbasaur"), "{output}");
    assert!(output.contains("Types: grass, poison"), "{output}");
    assert!(output.contains("Sprite: -"), "{output}");
    assert!(!output.contains(LOADING_TEXT), "{output}");
}

#[test]
fn test_notice_modal_over_catalog() {
    let mut harness = EffectStoreTestHarness::new(loaded_state(&["pikachu"]), reducer);
    harness.dispatch_collect(Action::CatalogSearchSubmit("agumon".into()));
    harness.assert_state(|s| s.notice.is_some());

    let mut catalog = CatalogScreen::new();
    let mut modal = NoticeModal::new();
    let output = harness.render_plain(80, 24, |frame, area, state| {
        catalog.render(
            frame,
            area,
            CatalogScreenProps {
                catalog: &state.catalog,
                is_focused: false,
            },
        );
        if let Some(notice) = &state.notice {
            modal.render(
                frame,
                area,
                NoticeModalProps {
                    notice,
                    is_focused: true,
                },
            );
        }
    });
    assert!(output.contains("Pokemon not found!"), "{output}");
}
