use std::fs;
use std::sync::Arc;
use std::time::Instant;

use labellens::{build_index, Analyzer};
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Analysis engine over the startup-built alias index
    pub analyzer: Analyzer,

    /// Process start time, for the readiness probe
    pub started_at: Instant,
}

impl ServerState {
    /// Create new server state: read both reference datasets, build the
    /// alias index, and stand up the analyzer. Any failure here is fatal:
    /// serving requests against a hollow index would misreport everything
    /// as unresolved.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let fda_json = fs::read_to_string(&config.fda_data_path).map_err(|err| {
            ServerError::Config(format!(
                "cannot read fda dataset at {}: {err}",
                config.fda_data_path
            ))
        })?;
        let common_json = fs::read_to_string(&config.common_data_path).map_err(|err| {
            ServerError::Config(format!(
                "cannot read common-ingredient dataset at {}: {err}",
                config.common_data_path
            ))
        })?;

        let index = build_index(&fda_json, &common_json)?;
        info!(
            fda_aliases = index.fda_len(),
            common_aliases = index.common_len(),
            "alias index built"
        );

        Ok(Self {
            config: Arc::new(config),
            analyzer: Analyzer::new(Arc::new(index)),
            started_at: Instant::now(),
        })
    }
}
