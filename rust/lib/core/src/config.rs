use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What happens to the `order` of surviving records after a delete.
///
/// `Renumber` keeps `order` contiguous (`1..N`) after every mutation.
/// `KeepGaps` leaves holes behind (deleting the first of three leaves
/// `{2, 3}`); display then sorts by `order`, and `add` takes
/// `max(order) + 1` so orders never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    #[default]
    Renumber,
    KeepGaps,
}

impl FromStr for DeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "renumber" => Ok(DeletePolicy::Renumber),
            "keep_gaps" | "keep-gaps" => Ok(DeletePolicy::KeepGaps),
            other => Err(format!("unknown delete policy '{}'", other)),
        }
    }
}

/// Runtime configuration shared by every list screen.
///
/// The host app builds one of these (from defaults, or from launch
/// arguments) and hands it to each controller and editor it creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Locale for toast and alert messages (`ar`, `en`).
    pub locale: String,

    /// Candidate lists longer than this show a search field.
    pub search_threshold: usize,

    /// Separator used when joining associated names into one label.
    pub list_separator: String,

    /// Renumbering behavior after delete.
    pub delete_policy: DeletePolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            locale: "ar".to_string(),
            search_threshold: 5,
            list_separator: "، ".to_string(),
            delete_policy: DeletePolicy::default(),
        }
    }
}

impl CatalogConfig {
    /// Parse configuration from launch arguments.
    ///
    /// Supported flags:
    /// - `--locale=CODE`
    /// - `--search-threshold=N`
    /// - `--separator=TEXT`
    /// - `--delete-policy=renumber|keep_gaps`
    ///
    /// Unknown flags and unparsable values are ignored (the default stays).
    pub fn from_args(args: &[String]) -> Self {
        let mut config = CatalogConfig::default();

        for arg in args {
            if let Some(val) = arg.strip_prefix("--locale=") {
                config.locale = val.to_string();
            } else if let Some(val) = arg.strip_prefix("--search-threshold=") {
                match val.parse::<usize>() {
                    Ok(n) => config.search_threshold = n,
                    Err(_) => tracing::warn!("ignoring search threshold '{}'", val),
                }
            } else if let Some(val) = arg.strip_prefix("--separator=") {
                config.list_separator = val.to_string();
            } else if let Some(val) = arg.strip_prefix("--delete-policy=") {
                match val.parse::<DeletePolicy>() {
                    Ok(policy) => config.delete_policy = policy,
                    Err(e) => tracing::warn!("{}", e),
                }
            }
        }

        config
    }

    /// Whether a candidate list of `count` items needs a search field.
    pub fn wants_search(&self, count: usize) -> bool {
        count > self.search_threshold
    }
}
