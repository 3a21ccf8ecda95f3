//! Legacy (v1) project config model
//!
//! v1 projects keep everything in `.skill/config` (JSON): one
//! `deploy_settings` entry per profile, carrying the skill id and the
//! function resources that were deployed from this project.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The `.skill/config` file of a v1 project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct V1Config {
    /// Per-profile deploy settings
    #[serde(default)]
    pub deploy_settings: HashMap<String, DeploySettings>,
}

/// Deploy settings for one profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploySettings {
    /// The deployed skill id, if the project was ever deployed
    #[serde(default)]
    pub skill_id: Option<String>,
    /// Whether this project was cloned from a hosted skill
    #[serde(default)]
    pub was_cloned: bool,
    /// Deployed resources
    #[serde(default)]
    pub resources: V1Resources,
}

/// Deployed resources of a v1 project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct V1Resources {
    /// Lambda function entries
    #[serde(default)]
    pub lambda: Vec<LambdaEntry>,
}

/// One deployed Lambda function
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LambdaEntry {
    /// Which skill endpoints this function serves (e.g. `custom/default`)
    #[serde(default)]
    pub usage: Vec<String>,
    /// Function name
    #[serde(default)]
    pub function_name: Option<String>,
    /// Where the function code lives, relative to the project root
    #[serde(default)]
    pub code_uri: Option<String>,
    /// Function runtime (e.g. `nodejs18.x`)
    #[serde(default)]
    pub runtime: Option<String>,
    /// Function handler
    #[serde(default)]
    pub handler: Option<String>,
    /// Last deployed revision id
    #[serde(default)]
    pub revision_id: Option<String>,
    /// Deployed function ARN
    #[serde(default)]
    pub arn: Option<String>,
}

impl V1Config {
    /// Load a v1 config from the given file path
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Get the deploy settings for a profile
    #[must_use]
    pub fn settings(&self, profile: &str) -> Option<&DeploySettings> {
        self.deploy_settings.get(profile)
    }
}
