//! labellens server: HTTP analysis service for ingredient labels.
//!
//! Thin HTTP shell around the labellens engine: the alias index is built
//! once from the configured JSON reference datasets at startup, then every
//! request shares it read-only.
//!
//! # Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe with alias counts
//! - `POST /api/v1/analyze` - Analyze one ingredient label
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::start_server;
pub use state::ServerState;
