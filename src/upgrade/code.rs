//! Function code relocation (self-managed skills)
//!
//! Copies each function's code out of `legacy/` into its v2 location and
//! records the code entries and infrastructure settings in the resources
//! config. The legacy copy is kept; the user deletes it once satisfied.

use std::path::Path;

use log::info;

use crate::models::{ResourcesConfig, UpgradeInfo};
use crate::paths;
use crate::upgrade::layout::copy_dir_recursive;
use crate::upgrade::UpgradeError;

/// Relocate existing function code and register it in the resources config
pub fn handle_existing_lambda_code(
    root: &Path,
    info: &UpgradeInfo,
    profile: &str,
) -> Result<(), UpgradeError> {
    let mut config = ResourcesConfig::load(&paths::resources_config(root))?;

    for (name, resource) in &info.lambda_resources {
        let src = paths::legacy_dir(root).join(&resource.code_uri);
        if !src.is_dir() {
            return Err(UpgradeError::MissingLegacyCode {
                function: name.clone(),
                path: src,
            });
        }

        let dst = root.join(&resource.v2_code_uri);
        copy_dir_recursive(&src, &dst)?;
        info!("relocated code for \"{name}\" to {}", resource.v2_code_uri);

        config.set_code_src(profile, name, format!("./{}", resource.v2_code_uri))?;
    }

    // One infrastructure block per profile, seeded from the first function
    if let Some(resource) = info.lambda_resources.values().next() {
        config.set_infrastructure(profile, resource.runtime.clone(), resource.handler.clone())?;
    }

    config.save()?;
    Ok(())
}
