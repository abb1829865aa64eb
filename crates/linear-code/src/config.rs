// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Layered configuration for building a code.

use crate::errors::{LinearCodeError, LinearCodeResult};
use crate::field::Bit;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variables with this prefix override file values,
/// e.g. `LINEAR_CODE_SEED=7`.
pub const ENV_PREFIX: &str = "LINEAR_CODE_";

/// Parameters for building a [`crate::LinearCode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeConfig {
    /// Codeword length n
    pub length: usize,
    /// Message dimension k
    pub dimension: usize,
    /// Seed for the random part of a generated matrix
    #[serde(default)]
    pub seed: Option<u64>,
    /// Explicit generator matrix, one row per message bit
    #[serde(default)]
    pub matrix: Option<Vec<Vec<Bit>>>,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            length: 7,
            dimension: 4,
            seed: None,
            matrix: None,
        }
    }
}

/// Layers defaults, then the YAML file at `path` (if any), then `LINEAR_CODE_*`
/// environment variables.
pub fn load_config(path: Option<&Path>) -> LinearCodeResult<CodeConfig> {
    let mut figment = Figment::from(Serialized::defaults(CodeConfig::default()));

    if let Some(path) = path {
        if !path.exists() {
            return Err(LinearCodeError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        figment = figment.merge(Yaml::file(path));
    }

    let config: CodeConfig = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
    Ok(config)
}
