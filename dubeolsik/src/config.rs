//! Dubeolsik-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `hangeul_core::Config` (flattened via serde)
//! - The semicolon swap used with the Colemak remap
//!
//! # Example
//!
//! ```rust
//! use libdubeolsik::DubeolsikConfig;
//!
//! let config = DubeolsikConfig::default();
//! assert!(!config.semicolon_swap);
//! let base = config.into_base();
//! assert!(base.start_in_korean);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DubeolsikConfig {
    /// Base configuration fields (modes, toggles, caps lock)
    #[serde(flatten)]
    pub base: hangeul_core::Config,

    /// Move ㅔ/ㅖ from P to the semicolon key while the layout remap is active
    #[serde(default)]
    pub semicolon_swap: bool,
}

impl DubeolsikConfig {
    /// Convert this config into the base config for use with `ImeEngine::new()`
    pub fn into_base(self) -> hangeul_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &hangeul_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut hangeul_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("writing config {}", path.display()))
    }
}
