//! Infrastructure layer for quotegen
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod remote;
pub mod share;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDisplayConfig, FileLogConfig, FileOutputConfig, FileRemoteConfig,
    FileReplConfig, FileShareConfig,
};
pub use logging::JsonlActivityLogger;
pub use remote::{DEFAULT_ENDPOINT, HttpRemoteQuoteSource};
pub use share::{ClipboardCommand, ClipboardError, SystemShareSheet};
