//! Application configuration.
//!
//! The reader runs fine with no configuration at all: defaults point at the
//! dev server that hosts the collection job's feed files. A YAML file can
//! override the data host, the keyword roster shown as filters, and the
//! request timeout.
//!
//! ```yaml
//! base_url: http://localhost:5173/data
//! keywords: [adachi, kitasenju, takenotsuka]
//! request_timeout_secs: 10
//! ```

use serde::{Deserialize, Serialize};
use std::error::Error;
use tracing::info;

/// Default data host: the frontend dev server serving `public/data/`.
const DEFAULT_BASE_URL: &str = "http://localhost:5173/data";

/// The collection job's search-keyword roster: the ward itself plus its
/// major place names. Shown as the available filters in the list header.
const DEFAULT_KEYWORDS: [&str; 12] = [
    "adachi",
    "kitasenju",
    "takenotsuka",
    "nishiarai",
    "ayase",
    "umejima",
    "gotanno",
    "aoi",
    "rokucho",
    "toneri",
    "hanahata",
    "senju",
];

/// Runtime configuration, loadable from a YAML file.
///
/// Every field defaults individually, so a config file may name only the
/// fields it changes.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL the feed resource names are resolved against.
    pub base_url: String,
    /// Keywords offered as filters in the list view.
    pub keywords: Vec<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            request_timeout_secs: 10,
        }
    }
}

/// Load configuration from an optional YAML file path.
///
/// With no path, returns the defaults. With a path, the file must exist and
/// parse; a missing or malformed file named explicitly on the command line
/// is a startup error, not something to silently paper over.
pub fn load_config(path: Option<&str>) -> Result<AppConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    info!(path, "Loaded configuration");
    Ok(config)
}
