//! Upgrade a v1 skill project to the v2 structure
//!
//! Sequential orchestration: check the project is upgrade-able, preview the
//! target structure, then build the v2 project — move the v1 tree aside,
//! lay down the skeleton, import the skill package, relocate code. Hosted
//! and self-managed skills share the shape of the flow but differ in the
//! skeleton and relocation steps.

use std::path::Path;

use crate::config;
use crate::models::{ResourcesConfig, UpgradeInfo};
use crate::output::{OperationResult, OutputMode};
use crate::paths;
use crate::smapi::SmapiClient;
use crate::upgrade;

/// Run the `upgrade-project` command in the current working directory
pub fn upgrade_project(
    profile_flag: Option<&str>,
    assume_yes: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;

    // 1. confirm the project is upgrade-able
    let profile = config::runtime_profile(profile_flag)?;
    let info = upgrade::detect::extract_upgrade_information(&root, &profile)?;

    // 2. preview the new project structure
    if !upgrade::preview::preview_upgrade(&info, assume_yes, mode)? {
        OperationResult {
            success: true,
            message: "Command upgrade-project aborted.".to_string(),
        }
        .render(mode);
        return Ok(());
    }

    // 3. create the v2 project based on the upgrade info
    if info.is_hosted {
        create_v2_hosted_skill_project(&root, &info, &profile)?;
    } else {
        create_v2_skill_project(&root, &info, &profile)?;
    }

    OperationResult {
        success: true,
        message: "Project migration finished.".to_string(),
    }
    .render(mode);
    Ok(())
}

fn create_v2_skill_project(
    root: &Path,
    info: &UpgradeInfo,
    profile: &str,
) -> anyhow::Result<()> {
    // 1. move v1 skill project content into the legacy folder
    upgrade::layout::move_project_to_legacy(root)?;
    // 2. create the v2 skeleton and validate the resources config
    upgrade::layout::create_v2_skeleton(root, profile)?;
    ResourcesConfig::load(&paths::resources_config(root))?.require_profile(profile)?;
    // 3. import skill metadata from the skill id
    let client = SmapiClient::new(config::access_token(profile)?)?;
    upgrade::package::download_skill_package(root, &client, &info.skill_id)?;
    // 4. copy existing function code into the v2 layout
    upgrade::code::handle_existing_lambda_code(root, info, profile)?;
    Ok(())
}

fn create_v2_hosted_skill_project(
    root: &Path,
    info: &UpgradeInfo,
    profile: &str,
) -> anyhow::Result<()> {
    // 1. move v1 skill project content into the legacy folder
    upgrade::layout::move_project_to_legacy(root)?;
    // 2. create the hosted skeleton and validate the resources config
    upgrade::hosted::create_v2_skeleton(root, &info.skill_id, profile)?;
    ResourcesConfig::load(&paths::resources_config(root))?.require_profile(profile)?;
    // 3. import skill metadata from the skill id
    let client = SmapiClient::new(config::access_token(profile)?)?;
    upgrade::package::download_skill_package(root, &client, &info.skill_id)?;
    // 4. copy function code into place and delete the old project
    upgrade::hosted::handle_existing_lambda_code(root)?;
    Ok(())
}
