//! Models for the project files skillkit owns
//!
//! - [`v1_config`] - the legacy `.skill/config` read by the upgrade
//! - [`resources_config`] - the v2 `skill-resources.json` written by it
//! - [`upgrade_info`] - what the eligibility check extracts from a v1 project

pub mod resources_config;
pub mod upgrade_info;
pub mod v1_config;

pub use resources_config::ResourcesConfig;
pub use upgrade_info::{LambdaResource, UpgradeInfo};
pub use v1_config::V1Config;
