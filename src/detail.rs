//! Detail screen state for a single entry

use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::effect::Effect;
use crate::nav::{DetailParams, MountId};

pub const TYPE_SEPARATOR: &str = ", ";

/// Full record of one entry as shown on the detail screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDetail {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// Type names in the order the API lists them.
    pub type_names: Vec<String>,
    pub image_url: Option<String>,
}

impl EntryDetail {
    pub fn types_label(&self) -> String {
        self.type_names.join(TYPE_SEPARATOR)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetailState {
    pub mount: MountId,
    pub params: DetailParams,
    /// Empty until `load`, then Loading → Loaded/Failed.
    pub record: DataResource<EntryDetail>,
}

impl DetailState {
    pub fn mount(mount: MountId, params: DetailParams) -> Self {
        Self {
            mount,
            params,
            record: DataResource::Empty,
        }
    }

    /// Starts the one fetch this mount is allowed. Later calls are no-ops.
    pub fn load(&mut self) -> Option<Effect> {
        if !self.record.is_empty() {
            return None;
        }
        self.record = DataResource::Loading;
        Some(Effect::FetchEntry {
            mount: self.mount,
            name: self.params.pokemon_name.clone(),
        })
    }

    pub fn loaded(&self) -> Option<&EntryDetail> {
        self.record.data()
    }

    /// A failed fetch keeps showing the loading indicator.
    pub fn shows_loading(&self) -> bool {
        !self.record.is_loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str) -> DetailParams {
        DetailParams {
            pokemon_name: name.into(),
        }
    }

    #[test]
    fn test_load_fires_once_per_mount() {
        let mut detail = DetailState::mount(MountId(3), params("pikachu"));
        assert!(detail.record.is_empty());

        let effect = detail.load();
        assert_eq!(
            effect,
            Some(Effect::FetchEntry {
                mount: MountId(3),
                name: "pikachu".into(),
            })
        );
        assert!(detail.record.is_loading());
        assert!(detail.load().is_none());
    }

    #[test]
    fn test_failure_still_shows_loading() {
        let mut detail = DetailState::mount(MountId(1), params("missingno"));
        detail.load();
        detail.record = DataResource::Failed("404".into());
        assert!(detail.shows_loading());
        assert!(detail.load().is_none());
    }

    #[test]
    fn test_types_label_keeps_source_order() {
        let detail = EntryDetail {
            name: "bulbasaur".into(),
            height: 7,
            weight: 69,
            type_names: vec!["grass".into(), "poison".into()],
            image_url: None,
        };
        assert_eq!(detail.types_label(), "grass, poison");
        assert_eq!(detail.types_label(), detail.types_label());
    }
}
