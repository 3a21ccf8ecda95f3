//! Layout transformation
//!
//! Moves the v1 tree into `legacy/` and lays down the v2 skeleton. Moves
//! are renames, not copies; `.git/` stays where it is.

use std::fs;
use std::path::Path;

use log::info;
use walkdir::WalkDir;

use crate::models::ResourcesConfig;
use crate::paths;
use crate::upgrade::UpgradeError;

/// Move every top-level entry except `.git` into `legacy/`.
///
/// A populated `legacy/` folder from an earlier partial run is rejected;
/// the user has to clean that up first.
pub fn move_project_to_legacy(root: &Path) -> Result<(), UpgradeError> {
    let legacy = paths::legacy_dir(root);
    if legacy.is_dir() && legacy.read_dir()?.next().is_some() {
        return Err(UpgradeError::LegacyNotEmpty);
    }
    fs::create_dir_all(&legacy)?;

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name();
        if name == paths::GIT_DIR || name == paths::LEGACY_DIR {
            continue;
        }
        fs::rename(entry.path(), legacy.join(&name))?;
    }

    info!("moved v1 project content into {}", legacy.display());
    Ok(())
}

/// Create the v2 skeleton for a self-managed skill.
///
/// Creates `skill-package/` and `lambda/` and writes a fresh
/// `skill-resources.json` for the profile.
pub fn create_v2_skeleton(root: &Path, profile: &str) -> Result<(), UpgradeError> {
    fs::create_dir_all(paths::skill_package_dir(root))?;
    fs::create_dir_all(paths::lambda_dir(root))?;

    let config = ResourcesConfig::skeleton(paths::resources_config(root), profile, None);
    config.save()?;

    info!("created v2 project skeleton at {}", root.display());
    Ok(())
}

/// Copy a directory tree, creating `dst` and any missing parents.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<(), UpgradeError> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(std::io::Error::from)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .unwrap_or_else(|_| unreachable!("walkdir yields paths under its root"));
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
