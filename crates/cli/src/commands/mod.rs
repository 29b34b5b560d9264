pub mod generate;
pub mod sections;

use std::path::Path;

use relnotes_config::AppConfig;
use relnotes_core::Error;

/// Load the configuration named on the command line, or the default one.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, Error> {
    AppConfig::load(path).map_err(|e| Error::Config {
        message: e.to_string(),
    })
}
