//! Preview and confirmation step
//!
//! Shows the user what the project will look like after the upgrade and
//! asks before anything moves. JSON mode is non-interactive: the preview is
//! printed and the upgrade only proceeds when `--yes` was passed.

use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;

use crate::models::UpgradeInfo;
use crate::output::{OutputMode, PreviewEntry, UpgradePreview};
use crate::paths;

/// Render the preview and return whether to proceed
pub fn preview_upgrade(
    info: &UpgradeInfo,
    assume_yes: bool,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    build_preview(info).render(mode);

    if assume_yes {
        return Ok(true);
    }
    if mode == OutputMode::Json {
        return Ok(false);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Upgrade this project to the v2 structure?")
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Build the post-upgrade tree for an upgrade-able project
#[must_use]
pub fn build_preview(info: &UpgradeInfo) -> UpgradePreview {
    let mut entries = vec![
        PreviewEntry {
            path: format!("{}/", paths::LEGACY_DIR),
            note: "current project content, moved aside".to_string(),
        },
        PreviewEntry {
            path: format!("{}/", paths::SKILL_PACKAGE_DIR),
            note: "skill metadata imported from the service".to_string(),
        },
    ];

    if info.is_hosted {
        entries.push(PreviewEntry {
            path: format!("{}/", paths::LAMBDA_DIR),
            note: "hosted function code".to_string(),
        });
    } else if info.lambda_resources.is_empty() {
        entries.push(PreviewEntry {
            path: format!("{}/", paths::LAMBDA_DIR),
            note: "function code".to_string(),
        });
    } else {
        for (name, resource) in &info.lambda_resources {
            entries.push(PreviewEntry {
                path: format!("{}/", resource.v2_code_uri),
                note: format!("code for function \"{name}\""),
            });
        }
    }

    entries.push(PreviewEntry {
        path: paths::RESOURCES_CONFIG_FILE.to_string(),
        note: "v2 resources config".to_string(),
    });
    if info.is_hosted {
        entries.push(PreviewEntry {
            path: format!("{}/{}", paths::SKILL_DIR, paths::STATES_FILE),
            note: "deployment states".to_string(),
        });
    }

    UpgradePreview {
        skill_id: info.skill_id.clone(),
        hosted: info.is_hosted,
        entries,
    }
}
