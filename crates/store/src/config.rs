//! State store configuration via TOML
//!
//! A state store is configured with its processing guarantee, the index and
//! document type its documents are written under, and the cluster it talks
//! to. The cluster section is parsed here but never dialled; connecting is
//! the document store's job.

use crate::traits::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tidal_core::StateType;

/// Port used for a host listed without one
pub const DEFAULT_PORT: u16 = 9300;

/// Separator between hosts in `cluster.hosts`
pub const HOST_SEPARATOR: char = ',';

/// Separator between host and port
pub const PORT_SEPARATOR: char = ':';

/// One `host:port` address of a cluster node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransportAddress {
    /// Host name or IP address
    pub host: String,
    /// Transport port
    pub port: u16,
}

impl fmt::Display for TransportAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Cluster connection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Cluster name, if the cluster requires one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Comma-separated `host[:port]` list
    #[serde(default)]
    pub hosts: String,
    /// Extra client settings passed through to the document store
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub settings: BTreeMap<String, String>,
}

impl ClusterConfig {
    /// Parse `hosts` into transport addresses.
    ///
    /// Empty entries are skipped. A host without a port gets
    /// [`DEFAULT_PORT`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Config` if no host is listed, an entry has an
    /// empty host, or a port is not a valid `u16`.
    pub fn transport_addresses(&self) -> StoreResult<Vec<TransportAddress>> {
        let addresses = self
            .hosts
            .split(HOST_SEPARATOR)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_address)
            .collect::<StoreResult<Vec<_>>>()?;

        if addresses.is_empty() {
            return Err(StoreError::config(
                "no hosts configured, make sure that you set cluster.hosts",
            ));
        }
        Ok(addresses)
    }
}

fn parse_address(entry: &str) -> StoreResult<TransportAddress> {
    match entry.split_once(PORT_SEPARATOR) {
        None => Ok(TransportAddress {
            host: entry.to_string(),
            port: DEFAULT_PORT,
        }),
        Some((host, _)) if host.trim().is_empty() => Err(StoreError::config(format!(
            "empty host in cluster.hosts entry '{}'",
            entry
        ))),
        Some((host, port)) => {
            let port = port.parse::<u16>().map_err(|e| {
                StoreError::config(format!("invalid port in cluster.hosts entry '{}': {}", entry, e))
            })?;
            Ok(TransportAddress {
                host: host.to_string(),
                port,
            })
        }
    }
}

fn default_doc_type() -> String {
    "state".to_string()
}

/// State store configuration.
///
/// # Example
///
/// ```toml
/// state_type = "opaque"
/// index = "my_index"
/// doc_type = "state"
///
/// [cluster]
/// name = "elasticsearch"
/// hosts = "node1:9300,node2"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Processing guarantee, which selects the codec
    #[serde(default)]
    pub state_type: StateType,
    /// Index documents are written to
    pub index: String,
    /// Document type within the index
    #[serde(default = "default_doc_type")]
    pub doc_type: String,
    /// Cluster connection settings
    #[serde(default)]
    pub cluster: ClusterConfig,
}

impl StateConfig {
    /// Create a config for `index` with default settings
    pub fn new(state_type: StateType, index: impl Into<String>) -> Self {
        StateConfig {
            state_type,
            index: index.into(),
            doc_type: default_doc_type(),
            cluster: ClusterConfig::default(),
        }
    }

    /// Identifier of the document holding state entry `id`
    pub fn document_key(&self, id: &str) -> String {
        format!("{}/{}/{}", self.index, self.doc_type, id)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# State store configuration
#
# Processing guarantee: "non_transactional", "transactional" or "opaque" (default)
state_type = "opaque"

# Index and document type state documents are written under.
index = "state"
doc_type = "state"

[cluster]
# name = "elasticsearch"
# Comma separated host[:port] list, default port 9300.
hosts = "localhost:9300"
"#
    }

    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this config, or if
    /// the index name is empty.
    pub fn from_toml_str(content: &str) -> StoreResult<Self> {
        let config: StateConfig = toml::from_str(content)
            .map_err(|e| StoreError::config(format!("Failed to parse config: {}", e)))?;
        if config.index.trim().is_empty() {
            return Err(StoreError::config("index must not be empty"));
        }
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> StoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoreError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            StoreError::Config(detail) => {
                StoreError::Config(format!("{} ({})", detail, path.display()))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> StoreResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                StoreError::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> StoreResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StoreError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            StoreError::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
