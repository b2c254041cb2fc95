// Configuration layer - bootstrap settings and logging
pub mod bootstrap_settings;
pub mod logging;

pub use bootstrap_settings::{BootstrapSettings, ConfigError};
pub use logging::init_logging;
