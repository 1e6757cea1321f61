use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Result};
use crate::fractal::{DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH};

/// Output size and iteration budget for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl RenderConfig {
    /// Width must leave room for one char and the terminator.
    pub fn validate(&self) -> Result<()> {
        if self.width < 2 {
            return Err(CipherError::InvalidConfig(format!("width must be at least 2, got {}", self.width)));
        }
        if self.height == 0 {
            return Err(CipherError::InvalidConfig("height must be non-zero".to_string()));
        }
        if self.max_iterations == 0 {
            return Err(CipherError::InvalidConfig("max_iterations must be non-zero".to_string()));
        }
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let config: RenderConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Missing file means defaults; a present but broken file is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
            return Ok(RenderConfig::default());
        }
        Self::load(path).inspect_err(|e| warn!("bad config {}: {}", path.display(), e))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
