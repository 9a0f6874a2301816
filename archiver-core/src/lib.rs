//! Core library for the weather archive job.
//!
//! This crate defines:
//! - Configuration loading from the process environment
//! - The observation/archive domain model
//! - Abstractions over the weather provider and the object store
//! - The per-run collection driver, archive writer, and run orchestrator
//!
//! It is used by `archiver-cli`, but can also be reused by other binaries or services.

pub mod archive;
pub mod collect;
pub mod config;
pub mod model;
pub mod provider;
pub mod run;
pub mod store;

pub use archive::{ArchiveError, Archiver};
pub use config::{Config, ConfigError};
pub use model::{ArchiveDocument, WeatherObservation};
pub use provider::{FetchError, WeatherProvider};
pub use run::RunReport;
pub use store::{ObjectStore, StoreError};
