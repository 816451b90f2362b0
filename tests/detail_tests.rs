//! Detail screen lifecycle: mount, fetch, back, late completions

use pokedex::{
    action::Action,
    catalog::EntrySummary,
    detail::EntryDetail,
    effect::Effect,
    nav::MountId,
    reducer::reducer,
    state::AppState,
};
use pretty_assertions::assert_eq;
use tui_dispatch::testing::*;
use tui_dispatch::EffectStore;

fn catalog_state(names: &[&str]) -> AppState {
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

fn charizard() -> EntryDetail {
    EntryDetail {
        name: "charizard".into(),
        height: 17,
        weight: 905,
        type_names: vec!["fire".into(), "flying".into()],
        image_url: Some("https://img/6.png".into()),
    }
}

/// Submits `name` and returns the mount the detail fetch is tagged with.
fn open(store: &mut EffectStore<AppState, Action, Effect>, name: &str) -> MountId {
    let result = store.dispatch(Action::CatalogSearchSubmit(name.into()));
    match result.effects.as_slice() {
        [Effect::FetchEntry { mount, .. }] => *mount,
        other => panic!("expected one FetchEntry, got {other:?}"),
    }
}

#[test]
fn test_detail_load_keeps_type_order() {
    let mut store = EffectStore::new(catalog_state(&["charizard"]), reducer);
    let mount = open(&mut store, "charizard");
    assert!(store.state().detail.as_ref().unwrap().shows_loading());

    store.dispatch(Action::DetailDidLoad {
        mount,
        detail: charizard(),
    });

    let detail = store.state().detail.as_ref().unwrap();
    let record = detail.loaded().unwrap();
    assert!(!detail.shows_loading());
    assert_eq!(record.type_names, vec!["fire", "flying"]);
    assert_eq!(record.type_names.len(), 2);
    assert_eq!(record.types_label(), "fire, flying");
}

#[test]
fn test_failed_detail_stays_loading_without_retry() {
    let mut harness = EffectStoreTestHarness::new(catalog_state(&["missingno"]), reducer);

    harness.dispatch_collect(Action::CatalogSearchSubmit("missingno".into()));
    let effects = harness.drain_effects();
    effects.effects_count(1);
    let Effect::FetchEntry { mount, name } = effects[0].clone() else {
        panic!("expected FetchEntry, got {effects:?}");
    };
    assert_eq!(name, "missingno");

    harness.complete_action(Action::DetailDidError {
        mount,
        error: "https://pokeapi.co/api/v2/pokemon/missingno returned 404".into(),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.detail.as_ref().is_some_and(|d| d.shows_loading()));
    harness.assert_state(|s| s.detail.as_ref().is_some_and(|d| d.record.is_failed()));
    harness.drain_effects().effects_count(0);

    // Renders and resizes never re-arm the fetch.
    harness.dispatch_collect(Action::Render);
    harness.dispatch_collect(Action::UiTerminalResize(100, 30));
    harness.drain_effects().effects_count(0);
}

#[test]
fn test_back_then_late_result_is_discarded() {
    let mut store = EffectStore::new(catalog_state(&["gengar"]), reducer);
    let mount = open(&mut store, "gengar");

    store.dispatch(Action::NavigateBack);
    assert!(store.state().detail.is_none());
    assert!(!store.state().nav.on_detail());

    let result = store.dispatch(Action::DetailDidLoad {
        mount,
        detail: EntryDetail {
            name: "gengar".into(),
            ..EntryDetail::default()
        },
    });
    assert!(!result.changed);
    assert!(store.state().detail.is_none());
}

#[test]
fn test_reopening_gets_a_fresh_mount() {
    let mut store = EffectStore::new(catalog_state(&["gengar", "haunter"]), reducer);
    let first = open(&mut store, "gengar");
    store.dispatch(Action::NavigateBack);
    let second = open(&mut store, "haunter");
    assert_ne!(first, second);

    // The first screen's fetch lands after the second screen mounted.
    let result = store.dispatch(Action::DetailDidLoad {
        mount: first,
        detail: EntryDetail {
            name: "gengar".into(),
            ..EntryDetail::default()
        },
    });
    assert!(!result.changed);
    let detail = store.state().detail.as_ref().unwrap();
    assert_eq!(detail.params.pokemon_name, "haunter");
    assert!(detail.shows_loading());
}

#[test]
fn test_search_is_ignored_on_detail_screen() {
    let mut store = EffectStore::new(catalog_state(&["ditto", "mew"]), reducer);
    open(&mut store, "ditto");

    let result = store.dispatch(Action::CatalogSearchSubmit("mew".into()));
    assert!(result.effects.is_empty());
    assert_eq!(store.state().nav.depth(), 2);
    assert_eq!(
        store.state().detail.as_ref().unwrap().params.pokemon_name,
        "ditto"
    );
}

#[test]
fn test_catalog_survives_detail_round_trip() {
    let mut store = EffectStore::new(catalog_state(&["eevee", "espeon", "umbreon"]), reducer);
    store.dispatch(Action::CatalogQueryChange("e".into()));
    let view_before = store.state().catalog.view.clone();

    let mount = open(&mut store, "espeon");
    store.dispatch(Action::DetailDidLoad {
        mount,
        detail: EntryDetail {
            name: "espeon".into(),
            type_names: vec!["psychic".into()],
            ..EntryDetail::default()
        },
    });
    store.dispatch(Action::NavigateBack);

    assert_eq!(store.state().catalog.view, view_before);
    assert_eq!(store.state().catalog.query_text, "e");
}
