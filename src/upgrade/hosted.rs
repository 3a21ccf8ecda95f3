//! Hosted-skill variants of skeleton creation and code relocation
//!
//! Hosted skills keep their code with the service, so the skeleton records
//! the skill id up front (in the resources config and in a deployment
//! states file) and relocation is a plain move of `legacy/lambda` followed
//! by deleting the legacy copy.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::models::ResourcesConfig;
use crate::paths;
use crate::upgrade::layout::copy_dir_recursive;
use crate::upgrade::UpgradeError;

/// Version written into freshly generated states files
pub const STATES_VERSION: &str = "2";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatesFile {
    states_version: String,
    profiles: BTreeMap<String, ProfileState>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileState {
    skill_id: String,
}

/// Create the v2 skeleton for a hosted skill.
///
/// Same as the self-managed skeleton, plus the skill id in the resources
/// config and a `.skill/states.json` for the profile.
pub fn create_v2_skeleton(
    root: &Path,
    skill_id: &str,
    profile: &str,
) -> Result<(), UpgradeError> {
    fs::create_dir_all(paths::skill_package_dir(root))?;
    fs::create_dir_all(paths::lambda_dir(root))?;

    let config =
        ResourcesConfig::skeleton(paths::resources_config(root), profile, Some(skill_id));
    config.save()?;

    write_states_file(root, skill_id, profile)?;

    info!("created v2 hosted-skill skeleton at {}", root.display());
    Ok(())
}

/// Bring the hosted function code into the v2 layout and drop `legacy/`.
pub fn handle_existing_lambda_code(root: &Path) -> Result<(), UpgradeError> {
    let legacy_lambda = paths::legacy_dir(root).join(paths::LAMBDA_DIR);
    if legacy_lambda.is_dir() {
        copy_dir_recursive(&legacy_lambda, &paths::lambda_dir(root))?;
        info!("relocated hosted function code to {}", paths::LAMBDA_DIR);
    }

    // Hosted projects keep no legacy copy; the service owns the history.
    fs::remove_dir_all(paths::legacy_dir(root))?;
    info!("removed legacy/");
    Ok(())
}

fn write_states_file(root: &Path, skill_id: &str, profile: &str) -> Result<(), UpgradeError> {
    let mut profiles = BTreeMap::new();
    profiles.insert(
        profile.to_string(),
        ProfileState {
            skill_id: skill_id.to_string(),
        },
    );
    let states = StatesFile {
        states_version: STATES_VERSION.to_string(),
        profiles,
    };

    let path = paths::states_file(root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(&states)?)?;
    Ok(())
}
