//! PokeAPI data source
//!
//! Screens only see [`CatalogSource`]; the HTTP client is one implementation of
//! it. Nothing here is cached: every mount fetches afresh.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::catalog::EntrySummary;
use crate::detail::EntryDetail;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_INDEX_LIMIT: u32 = 1000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} returned {status}")]
    Status { status: u16, url: String },
    #[error("response parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read-only access to the catalog. Swappable for an indexed or paginated
/// backend without touching filter/sort/match code.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_index(&self) -> Result<Vec<EntrySummary>, ApiError>;
    async fn fetch_entry(&self, name: &str) -> Result<EntryDetail, ApiError>;
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Validated by [`crate::config`] before it gets here.
    pub base_url: String,
    pub index_limit: u32,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            index_limit: DEFAULT_INDEX_LIMIT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ListResponse {
    results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    name: String,
    height: u32,
    weight: u32,
    types: Vec<PokemonTypeSlot>,
    sprites: PokemonSprites,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    #[serde(rename = "type")]
    type_info: TypeName,
}

#[derive(Clone, Debug, Deserialize)]
struct TypeName {
    name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct PokemonSprites {
    #[serde(default)]
    front_default: Option<String>,
}

impl From<NamedResource> for EntrySummary {
    fn from(resource: NamedResource) -> Self {
        EntrySummary {
            name: resource.name,
            url: resource.url,
        }
    }
}

impl From<PokemonResponse> for EntryDetail {
    fn from(response: PokemonResponse) -> Self {
        EntryDetail {
            name: response.name,
            height: response.height,
            weight: response.weight,
            type_names: response
                .types
                .into_iter()
                .map(|slot| slot.type_info.name)
                .collect(),
            image_url: response.sprites.front_default,
        }
    }
}

pub fn parse_index(bytes: &[u8]) -> Result<Vec<EntrySummary>, ApiError> {
    let response: ListResponse = serde_json::from_slice(bytes)?;
    Ok(response.results.into_iter().map(EntrySummary::from).collect())
}

pub fn parse_entry(bytes: &[u8]) -> Result<EntryDetail, ApiError> {
    let response: PokemonResponse = serde_json::from_slice(bytes)?;
    Ok(EntryDetail::from(response))
}

pub struct PokeApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PokeApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path
        )
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl CatalogSource for PokeApiClient {
    async fn fetch_index(&self) -> Result<Vec<EntrySummary>, ApiError> {
        let url = self.endpoint(&format!("pokemon?limit={}", self.config.index_limit));
        let bytes = self.get_bytes(&url).await?;
        let entries = parse_index(&bytes)?;
        tracing::debug!(count = entries.len(), "index fetched");
        Ok(entries)
    }

    async fn fetch_entry(&self, name: &str) -> Result<EntryDetail, ApiError> {
        let url = self.endpoint(&format!("pokemon/{name}"));
        let bytes = self.get_bytes(&url).await?;
        parse_entry(&bytes)
    }
}
