//! Command-line / environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tui_dispatch_debug::DebugCliArgs;
use url::Url;

use crate::api::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_INDEX_LIMIT};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid api base url {url:?}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Pokedex TUI - browse the PokeAPI catalog
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse, filter and inspect Pokemon from PokeAPI")]
pub struct Args {
    /// PokeAPI base URL
    #[arg(long, env = "POKEDEX_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// How many entries the bulk index fetch asks for
    #[arg(
        long,
        env = "POKEDEX_INDEX_LIMIT",
        default_value_t = DEFAULT_INDEX_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub index_limit: u32,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "POKEDEX_TIMEOUT_SECS",
        default_value = "10",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Log file (the terminal belongs to the UI)
    #[arg(long, env = "POKEDEX_LOG_FILE", default_value = "/tmp/pokedex.log")]
    pub log_file: PathBuf,

    /// Log verbosity (repeat for info, debug, trace); RUST_LOG wins
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub debug: DebugCliArgs,
}

impl Args {
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        let url = Url::parse(&self.api_base_url).map_err(|source| ConfigError::BaseUrl {
            url: self.api_base_url.clone(),
            source,
        })?;
        Ok(ApiConfig {
            base_url: url.to_string(),
            index_limit: self.index_limit,
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_public_api() {
        let args = Args::try_parse_from(["pokedex"]).expect("parse defaults");
        let config = args.api_config().expect("valid config");
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.index_limit, 1000);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "pokedex",
            "--api-base-url",
            "http://127.0.0.1:8080/api/v2",
            "--index-limit",
            "151",
            "--verbose",
            "--verbose",
        ])
        .expect("parse flags");
        let config = args.api_config().expect("valid config");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api/v2");
        assert_eq!(config.index_limit, 151);
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(Args::try_parse_from(["pokedex", "--index-limit", "0"]).is_err());
    }

    #[test]
    fn test_bad_base_url_is_a_config_error() {
        let args =
            Args::try_parse_from(["pokedex", "--api-base-url", "not a url"]).expect("parse");
        assert!(matches!(
            args.api_config(),
            Err(ConfigError::BaseUrl { .. })
        ));
    }
}
