/// Main configuration module.
/// 
/// Re-exports submodules for synchronization and HTTP client configuration,
/// plus the runtime settings parsed from the command line.
pub mod sync;
pub mod client;
pub mod settings;

pub use settings::{ClientConfig, ConfigError};
