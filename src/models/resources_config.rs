//! v2 resources config model
//!
//! `skill-resources.json` is the project file of the v2 layout: one entry
//! per profile describing where the skill metadata and function code live
//! and how the skill is deployed. This type owns parsing, validation and
//! the mutations the upgrade performs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Version written into freshly generated configs
pub const RESOURCES_VERSION: &str = "2";

/// Infrastructure type recorded for self-managed function code
pub const INFRA_TYPE_CFN: &str = "cfn-deployer";

/// Errors from reading or mutating a resources config
#[derive(Debug, Error)]
pub enum ResourcesError {
    /// The file could not be read or written
    #[error("io error on {path}: {source}")]
    Io {
        /// The config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for this schema
    #[error("invalid resources config {path}: {source}")]
    Invalid {
        /// The config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A profile entry is missing
    #[error("profile \"{0}\" not found in {1}")]
    MissingProfile(String, PathBuf),
}

/// On-disk shape of `skill-resources.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesFile {
    /// Schema version
    pub resources_version: String,
    /// Per-profile resources
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileResources>,
}

/// Resources of one profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResources {
    /// Skill id (present once deployed, or for hosted skills)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,
    /// Where the skill package lives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_metadata: Option<SkillMetadata>,
    /// Function code entries, keyed by function name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub code: BTreeMap<String, CodeResource>,
    /// How the function code is deployed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_infrastructure: Option<SkillInfrastructure>,
}

/// Skill package location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMetadata {
    /// Path to the skill package, relative to the project root
    pub src: String,
}

/// One function code entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeResource {
    /// Path to the code, relative to the project root
    pub src: String,
}

/// Deployment settings for function code
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInfrastructure {
    /// Deployer type (e.g. [`INFRA_TYPE_CFN`])
    #[serde(rename = "type")]
    pub infra_type: String,
    /// Deployer-specific settings
    pub user_config: InfraUserConfig,
}

/// Deployer-specific settings carried over from the v1 resources
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfraUserConfig {
    /// Function runtime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    /// Function handler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
}

/// A `skill-resources.json` bound to its file path
#[derive(Debug, Clone)]
pub struct ResourcesConfig {
    path: PathBuf,
    file: ResourcesFile,
}

impl ResourcesConfig {
    /// Build a fresh skeleton for one profile.
    ///
    /// The skeleton points `skillMetadata.src` at `./skill-package`; hosted
    /// skills additionally record their skill id.
    #[must_use]
    pub fn skeleton(path: PathBuf, profile: &str, skill_id: Option<&str>) -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            profile.to_string(),
            ProfileResources {
                skill_id: skill_id.map(str::to_string),
                skill_metadata: Some(SkillMetadata {
                    src: format!("./{}", paths::SKILL_PACKAGE_DIR),
                }),
                code: BTreeMap::new(),
                skill_infrastructure: None,
            },
        );
        Self {
            path,
            file: ResourcesFile {
                resources_version: RESOURCES_VERSION.to_string(),
                profiles,
            },
        }
    }

    /// Load and validate a resources config from disk
    pub fn load(path: &Path) -> Result<Self, ResourcesError> {
        let content = fs::read_to_string(path).map_err(|source| ResourcesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = serde_json::from_str(&content).map_err(|source| ResourcesError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Write the config back to its file (pretty JSON)
    pub fn save(&self) -> Result<(), ResourcesError> {
        let content =
            serde_json::to_string_pretty(&self.file).map_err(|source| ResourcesError::Invalid {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, content).map_err(|source| ResourcesError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// The file path this config is bound to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed file contents
    #[must_use]
    pub const fn file(&self) -> &ResourcesFile {
        &self.file
    }

    /// Get a profile entry, failing when it is absent
    pub fn require_profile(&self, profile: &str) -> Result<&ProfileResources, ResourcesError> {
        self.file
            .profiles
            .get(profile)
            .ok_or_else(|| ResourcesError::MissingProfile(profile.to_string(), self.path.clone()))
    }

    fn require_profile_mut(
        &mut self,
        profile: &str,
    ) -> Result<&mut ProfileResources, ResourcesError> {
        let path = self.path.clone();
        self.file
            .profiles
            .get_mut(profile)
            .ok_or_else(move || ResourcesError::MissingProfile(profile.to_string(), path))
    }

    /// Record a function code entry for a profile
    pub fn set_code_src(
        &mut self,
        profile: &str,
        function: &str,
        src: String,
    ) -> Result<(), ResourcesError> {
        self.require_profile_mut(profile)?
            .code
            .insert(function.to_string(), CodeResource { src });
        Ok(())
    }

    /// Record the infrastructure settings for a profile
    pub fn set_infrastructure(
        &mut self,
        profile: &str,
        runtime: Option<String>,
        handler: Option<String>,
    ) -> Result<(), ResourcesError> {
        self.require_profile_mut(profile)?.skill_infrastructure = Some(SkillInfrastructure {
            infra_type: INFRA_TYPE_CFN.to_string(),
            user_config: InfraUserConfig { runtime, handler },
        });
        Ok(())
    }
}
