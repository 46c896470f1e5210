//! Configuration file loading for quotegen
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./quotegen.toml` or `./.quotegen.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/quotegen/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDisplayConfig, FileLogConfig, FileOutputConfig, FileRemoteConfig,
    FileReplConfig, FileShareConfig,
};
pub use loader::ConfigLoader;
