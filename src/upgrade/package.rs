//! Skill package import
//!
//! Asks the service to export the skill package for the skill id, polls the
//! export until it finishes, downloads the archive, and unpacks it into
//! `skill-package/`.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::thread;
use std::time::Duration;

use log::{debug, info};
use zip::ZipArchive;

use crate::paths;
use crate::smapi::{ExportStatus, SmapiClient, SmapiError, Stage};
use crate::upgrade::UpgradeError;

/// Upgrades always import the in-development version of the skill
pub const DOWNLOAD_STAGE: Stage = Stage::Development;

/// Temp filename for the downloaded archive (inside `.skill/`)
const PACKAGE_ZIP: &str = "skill-package.zip";

const POLL_INTERVAL: Duration = Duration::from_secs(2);
const MAX_POLL_ATTEMPTS: u32 = 30;

/// Polling behavior while waiting for an export to finish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Delay between status checks
    pub interval: Duration,
    /// Status checks before the export counts as timed out
    pub max_attempts: u32,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            max_attempts: MAX_POLL_ATTEMPTS,
        }
    }
}

/// Import the skill package for `skill_id` into `skill-package/`
pub fn download_skill_package(
    root: &Path,
    client: &SmapiClient,
    skill_id: &str,
) -> anyhow::Result<()> {
    download_skill_package_with(root, client, skill_id, PollSettings::default())
}

/// Same as [`download_skill_package`], with explicit polling behavior
pub fn download_skill_package_with(
    root: &Path,
    client: &SmapiClient,
    skill_id: &str,
    poll: PollSettings,
) -> anyhow::Result<()> {
    info!("exporting skill package for {skill_id}");
    let location = client.export_package(skill_id, DOWNLOAD_STAGE)?;
    let download_url = wait_for_export(client, &location, poll)?;

    let skill_dir = root.join(paths::SKILL_DIR);
    fs::create_dir_all(&skill_dir)?;
    let zip_path = skill_dir.join(PACKAGE_ZIP);
    client.download(&download_url, &zip_path)?;

    unzip(&zip_path, &paths::skill_package_dir(root))?;
    fs::remove_file(&zip_path)?;

    info!("imported skill package into {}", paths::skill_package_dir(root).display());
    Ok(())
}

/// Poll the export until it succeeds and return the download URL
fn wait_for_export(
    client: &SmapiClient,
    location: &str,
    poll: PollSettings,
) -> Result<String, SmapiError> {
    for attempt in 1..=poll.max_attempts {
        let response = client.export_status(location)?;
        match response.status {
            ExportStatus::Succeeded => {
                return response
                    .skill
                    .and_then(|skill| skill.location)
                    .ok_or_else(|| {
                        SmapiError::ExportFailed("no download location in response".to_string())
                    });
            },
            ExportStatus::Failed => {
                return Err(SmapiError::ExportFailed("export reported FAILED".to_string()));
            },
            ExportStatus::InProgress => {
                debug!("export in progress (attempt {attempt}/{})", poll.max_attempts);
                thread::sleep(poll.interval);
            },
        }
    }
    Err(SmapiError::ExportTimeout {
        attempts: poll.max_attempts,
    })
}

/// Unpack a zip archive into `dest`, refusing entries that escape it
fn unzip(zip_path: &Path, dest: &Path) -> Result<(), UpgradeError> {
    let mut archive = ZipArchive::new(File::open(zip_path)?)
        .map_err(|err| UpgradeError::Io(io::Error::other(err)))?;
    fs::create_dir_all(dest)?;

    for index in 0..archive.len() {
        let mut file = archive
            .by_index(index)
            .map_err(|err| UpgradeError::Io(io::Error::other(err)))?;
        // enclosed_name rejects absolute paths and `..` components
        let Some(rel) = file.enclosed_name() else {
            continue;
        };
        let target = dest.join(rel);

        if file.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&target)?;
            io::copy(&mut file, &mut out)?;
        }
    }
    Ok(())
}
