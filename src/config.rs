//! Global configuration and profile resolution
//!
//! Profiles carry the credentials skillkit uses to talk to the remote
//! skill-management service. Config is stored at
//! `~/.config/skillkit/config.toml` (XDG standard).

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::paths;

/// Environment variable consulted when `--profile` is not passed
pub const PROFILE_ENV: &str = "SKILLKIT_PROFILE";

/// Profile used when neither the flag nor the env var is set
pub const DEFAULT_PROFILE: &str = "default";

/// Global skillkit configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Configured profiles (keyed by profile name)
    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
}

/// A single profile's settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Vendor id this profile deploys under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    /// OAuth token for the skill-management service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenConfig>,
}

/// Stored OAuth token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Bearer token sent to the service
    pub access_token: String,
    /// Refresh token (unused by the upgrade; kept for other commands)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// When the access token expires (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl GlobalConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        paths::global_config_dir()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or default (no profiles) if not exists
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_path();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get a profile by name
    #[must_use]
    pub fn profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.get(name)
    }
}

impl TokenConfig {
    /// Whether the access token has passed its expiry time
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires| expires <= now)
    }
}

/// Resolve the profile to run under.
///
/// Resolution order: `--profile` flag, then `$SKILLKIT_PROFILE`, then
/// `default`. The resolved profile must exist in the global config.
pub fn runtime_profile(flag: Option<&str>) -> anyhow::Result<String> {
    let env_profile = std::env::var(PROFILE_ENV).ok();
    let name = flag
        .map(str::to_string)
        .or(env_profile)
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let config = GlobalConfig::load();
    if config.profile(&name).is_none() {
        bail!(
            "profile \"{name}\" is not configured; add it to {}",
            GlobalConfig::config_path().display()
        );
    }
    Ok(name)
}

/// Get the access token for a profile, failing on missing or expired tokens.
pub fn access_token(profile: &str) -> anyhow::Result<String> {
    let config = GlobalConfig::load();
    let token = config
        .profile(profile)
        .with_context(|| format!("profile \"{profile}\" is not configured"))?
        .token
        .as_ref()
        .with_context(|| format!("profile \"{profile}\" has no token; re-authenticate first"))?;

    if token.is_expired(Utc::now()) {
        bail!("the token for profile \"{profile}\" has expired; re-authenticate first");
    }
    Ok(token.access_token.clone())
}
