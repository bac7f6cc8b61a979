//! The remote support matrix: which servers, specs and Java SE versions are
//! valid for each MicroProfile version.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{StarterError, StarterResult};

/// Configuration for a single MicroProfile version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionConfig {
    /// Server runtimes that can host this version.
    pub supported_servers: Vec<String>,

    /// Specification identifiers selectable for this version.
    #[serde(default)]
    pub specs: Vec<String>,
}

/// The support matrix fetched from the starter service.
///
/// Immutable once fetched; scoped to one wizard run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportMatrix {
    /// Per-version configuration, keyed by version identifier (e.g. "MP4.1").
    pub configs: BTreeMap<String, VersionConfig>,

    /// Human-readable descriptions, keyed by spec identifier.
    #[serde(default)]
    pub descriptions: HashMap<String, String>,
}

impl SupportMatrix {
    /// Parse and validate a support matrix from a JSON value.
    ///
    /// The upstream service is untyped on this endpoint, so the shape is
    /// checked here rather than trusted.
    pub fn from_value(value: serde_json::Value) -> StarterResult<Self> {
        let matrix: Self = serde_json::from_value(value)
            .map_err(|e| StarterError::MalformedMatrix(e.to_string()))?;
        matrix.validate()?;
        Ok(matrix)
    }

    fn validate(&self) -> StarterResult<()> {
        if self.configs.is_empty() {
            return Err(StarterError::MalformedMatrix("no versions listed".to_string()));
        }

        for (version, config) in &self.configs {
            if config.supported_servers.is_empty() {
                return Err(StarterError::MalformedMatrix(format!(
                    "version {version} lists no supported servers"
                )));
            }
        }

        Ok(())
    }

    /// Version identifiers, newest first.
    pub fn versions(&self) -> Vec<&str> {
        // BTreeMap iterates ascending; starter version keys sort
        // lexicographically in release order (MP1.2 .. MP4.1).
        self.configs.keys().rev().map(String::as_str).collect()
    }

    /// Configuration for a version, if it exists.
    pub fn config(&self, version: &str) -> Option<&VersionConfig> {
        self.configs.get(version)
    }

    /// Description for a spec identifier, falling back to the identifier.
    pub fn describe<'a>(&'a self, spec_id: &'a str) -> &'a str {
        self.descriptions.get(spec_id).map_or(spec_id, String::as_str)
    }
}

/// Java SE versions offered for a MicroProfile version / server pair.
///
/// The starter service leaves this choice to the client. Legacy runtimes and
/// anything below MP3.x stay on SE 8; modern runtimes add the current LTS
/// releases.
pub fn java_se_versions(mp_version: &str, server: &str) -> Vec<&'static str> {
    let modern_server = matches!(
        server,
        "LIBERTY" | "OPEN_LIBERTY" | "PAYARA_MICRO" | "QUARKUS" | "HELIDON" | "WILDFLY"
    );

    if mp_version_at_least(mp_version, 3) && modern_server {
        vec!["SE21", "SE17", "SE11"]
    } else if mp_version_at_least(mp_version, 3) {
        vec!["SE11", "SE8"]
    } else {
        vec!["SE8"]
    }
}

/// True when a version key such as "MP3.2" has a major component >= `major`.
fn mp_version_at_least(mp_version: &str, major: u32) -> bool {
    mp_version
        .trim_start_matches("MP")
        .split('.')
        .next()
        .and_then(|m| m.parse::<u32>().ok())
        .is_some_and(|m| m >= major)
}
