use std::path::Path;

use config::builder::DefaultState;
use config::ConfigBuilder;
use cubekin::{FaceletState, UnknownMovePolicy, Verification};
use eyre::{Context, Result};
use serde::Deserialize;

const SETTINGS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_SETTINGS_STR: &str = include_str!("default.yaml");
/// Prefix for environment variables, such as `CUBEKIN_VERIFY_LOADS`.
const ENV_PREFIX: &str = "CUBEKIN";

/// Settings for the command-line driver.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub unknown_moves: UnknownMovePolicy,
    pub verify_loads: bool,
    pub start_state: FaceletState,
}
impl Settings {
    /// Loads settings from the embedded defaults, then `user_file` if there
    /// is one, then the environment.
    pub fn load(user_file: Option<&Path>) -> Result<Self> {
        let mut config = defaults();
        if let Some(path) = user_file {
            log::debug!("loading settings from {}", path.display());
            config = config.add_source(config::File::from(path).format(SETTINGS_FILE_FORMAT));
        }
        config
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .and_then(|c| c.try_deserialize())
            .context("error loading settings")
    }

    /// Returns how strictly to check states from outside.
    pub fn verification(&self) -> Verification {
        match self.verify_loads {
            true => Verification::Reachable,
            false => Verification::Physical,
        }
    }
}

fn defaults() -> ConfigBuilder<DefaultState> {
    config::Config::builder().add_source(config::File::from_str(
        DEFAULT_SETTINGS_STR,
        SETTINGS_FILE_FORMAT,
    ))
}
