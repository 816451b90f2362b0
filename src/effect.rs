//! Effects - fetches declared by the reducer

use std::sync::Arc;

use crate::action::Action;
use crate::api::CatalogSource;
use crate::nav::MountId;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Bulk index for the list screen mounted as `mount`.
    FetchIndex { mount: MountId },
    /// Full record for the detail screen mounted as `mount`.
    FetchEntry { mount: MountId, name: String },
}

impl Effect {
    /// Task key, unique per mount so a new screen never cancels an old fetch.
    pub fn task_key(&self) -> String {
        match self {
            Effect::FetchIndex { mount } => format!("index_{mount}"),
            Effect::FetchEntry { mount, .. } => format!("entry_{mount}"),
        }
    }
}

/// Runs one effect to completion. Failures are logged here and come back as
/// `...DidError` actions; they never escape as errors.
pub async fn perform(source: Arc<dyn CatalogSource>, effect: Effect) -> Action {
    match effect {
        Effect::FetchIndex { mount } => match source.fetch_index().await {
            Ok(entries) => Action::CatalogDidLoad { mount, entries },
            Err(error) => {
                tracing::error!(%mount, %error, "Error fetching Pokemon list");
                Action::CatalogDidError {
                    mount,
                    error: error.to_string(),
                }
            }
        },
        Effect::FetchEntry { mount, name } => match source.fetch_entry(&name).await {
            Ok(detail) => Action::DetailDidLoad { mount, detail },
            Err(error) => {
                tracing::error!(%mount, %name, %error, "Error fetching Pokemon data");
                Action::DetailDidError {
                    mount,
                    error: error.to_string(),
                }
            }
        },
    }
}
