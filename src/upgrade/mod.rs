//! The v1 → v2 upgrade pipeline
//!
//! Split along the four steps the command runs:
//!
//! - [`detect`] - decide whether the project is upgrade-able and extract
//!   what the later steps need
//! - [`preview`] - show the target structure and get user confirmation
//! - [`layout`] - move the v1 tree aside and build the v2 skeleton
//! - [`package`] - import the skill package from the remote service
//! - [`code`] - relocate existing function code into the v2 layout
//! - [`hosted`] - the hosted-skill variants of skeleton and relocation

use std::path::PathBuf;

use thiserror::Error;

pub mod code;
pub mod detect;
pub mod hosted;
pub mod layout;
pub mod package;
pub mod preview;

/// Errors that stop an upgrade
#[derive(Debug, Error)]
pub enum UpgradeError {
    /// No `.skill/config` in the working directory
    #[error("no v1 skill project found in {0}; run this command at the project root")]
    NotV1Project(PathBuf),

    /// A resources config already exists
    #[error("skill-resources.json already exists; this project was already upgraded")]
    AlreadyUpgraded,

    /// The v1 config carries no skill id for the profile
    #[error("no skill_id for profile \"{0}\" in .skill/config; deploy with v1 first")]
    MissingSkillId(String),

    /// The recorded skill id does not look like a skill id
    #[error("\"{0}\" is not a valid skill id")]
    MalformedSkillId(String),

    /// A lambda entry has no function name
    #[error("a lambda resource in .skill/config is missing its function name")]
    MissingFunctionName,

    /// A lambda entry has no usage list
    #[error("lambda resource \"{0}\" is missing its usage list")]
    MissingUsage(String),

    /// A lambda entry has no code location
    #[error("lambda resource \"{0}\" is missing its code uri")]
    MissingCodeUri(String),

    /// Two entries for the same function disagree
    #[error("conflicting code settings for function \"{0}\"")]
    ConflictingResource(String),

    /// A previous run left a populated legacy folder behind
    #[error("legacy/ already exists and is not empty; remove it before upgrading")]
    LegacyNotEmpty,

    /// Code recorded in the v1 config is not in the moved tree
    #[error("code for function \"{function}\" not found at {path}")]
    MissingLegacyCode {
        /// The function whose code is missing
        function: String,
        /// Where it was expected
        path: PathBuf,
    },

    /// The v1 config could not be parsed
    #[error("invalid .skill/config: {0}")]
    InvalidV1Config(#[from] serde_json::Error),

    /// The resources config could not be read back or updated
    #[error(transparent)]
    Resources(#[from] crate::models::resources_config::ResourcesError),

    /// Filesystem failure while reorganizing the project
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
