//! Configuration validation.

use crate::config::{ChainPreset, Config};
use crate::error::{Error, Result};

/// Validate the entire configuration.
///
/// Checks that the default chain exists and that every preset's
/// augmentations construct cleanly, so parameter errors surface before any
/// file is processed.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(ref chain_name) = config.defaults.chain
        && !config.chains.contains_key(chain_name)
    {
        return Err(Error::ChainNotFound {
            name: chain_name.clone(),
        });
    }

    for (name, preset) in &config.chains {
        validate_preset(name, preset)?;
    }

    Ok(())
}

/// Validate a single chain preset by building each augmentation.
pub fn validate_preset(name: &str, preset: &ChainPreset) -> Result<()> {
    for spec in &preset.augmentations {
        spec.build().map_err(|e| Error::ConfigValidation {
            message: format!("chain '{name}': {e}"),
        })?;
    }
    Ok(())
}

/// Get a chain preset by name from the config.
pub fn get_chain<'a>(config: &'a Config, name: &str) -> Result<&'a ChainPreset> {
    config.chains.get(name).ok_or_else(|| Error::ChainNotFound {
        name: name.to_string(),
    })
}
