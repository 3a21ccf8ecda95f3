//! Upgrade-eligibility detection
//!
//! Reads the v1 `.skill/config`, validates what it finds, and distills it
//! into an [`UpgradeInfo`]. Everything that can make the upgrade impossible
//! is rejected here, before anything on disk is touched.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::upgrade_info::{LambdaResource, UpgradeInfo};
use crate::models::v1_config::{LambdaEntry, V1Config};
use crate::paths;
use crate::upgrade::UpgradeError;

/// Canonical skill id shape: `skill-` followed by a UUID
const SKILL_ID_PATTERN: &str = r"^skill-[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";

fn skill_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| match Regex::new(SKILL_ID_PATTERN) {
        Ok(re) => re,
        Err(_) => unreachable!("skill id pattern is a constant"),
    })
}

/// Whether a string is a well-formed skill id
#[must_use]
pub fn is_valid_skill_id(id: &str) -> bool {
    skill_id_regex().is_match(id)
}

/// Extract everything the upgrade needs from a v1 project.
///
/// Fails when the directory is not a v1 project, was already upgraded, or
/// the v1 config is incomplete for the given profile.
pub fn extract_upgrade_information(
    root: &Path,
    profile: &str,
) -> Result<UpgradeInfo, UpgradeError> {
    if paths::resources_config(root).exists() {
        return Err(UpgradeError::AlreadyUpgraded);
    }

    let v1_path = paths::v1_config(root);
    if !v1_path.is_file() {
        return Err(UpgradeError::NotV1Project(root.to_path_buf()));
    }

    let config: V1Config = serde_json::from_str(&fs::read_to_string(&v1_path)?)?;
    let settings = config
        .settings(profile)
        .ok_or_else(|| UpgradeError::MissingSkillId(profile.to_string()))?;

    let skill_id = settings
        .skill_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| UpgradeError::MissingSkillId(profile.to_string()))?;
    if !is_valid_skill_id(skill_id) {
        return Err(UpgradeError::MalformedSkillId(skill_id.to_string()));
    }

    if settings.was_cloned {
        return Ok(UpgradeInfo::hosted(skill_id.to_string()));
    }

    let lambda_resources = collect_lambda_resources(&settings.resources.lambda)?;
    Ok(UpgradeInfo {
        skill_id: skill_id.to_string(),
        is_hosted: false,
        lambda_resources,
    })
}

/// Validate and merge the v1 lambda entries into per-function resources.
///
/// Duplicate entries for the same function are merged (usage lists are
/// concatenated); entries that disagree on code location, runtime or
/// handler are a conflict.
fn collect_lambda_resources(
    entries: &[LambdaEntry],
) -> Result<BTreeMap<String, LambdaResource>, UpgradeError> {
    let mut resources: BTreeMap<String, LambdaResource> = BTreeMap::new();

    for entry in entries {
        let name = entry
            .function_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or(UpgradeError::MissingFunctionName)?;
        if entry.usage.is_empty() {
            return Err(UpgradeError::MissingUsage(name.to_string()));
        }
        let code_uri = entry
            .code_uri
            .as_deref()
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| UpgradeError::MissingCodeUri(name.to_string()))?;

        let resource = LambdaResource {
            usage: entry.usage.clone(),
            code_uri: code_uri.to_string(),
            v2_code_uri: v2_code_uri(name, code_uri),
            runtime: entry.runtime.clone(),
            handler: entry.handler.clone(),
            revision_id: entry.revision_id.clone(),
            arn: entry.arn.clone(),
        };

        match resources.get_mut(name) {
            None => {
                resources.insert(name.to_string(), resource);
            },
            Some(existing) => {
                let conflicting = existing.code_uri != resource.code_uri
                    || existing.runtime != resource.runtime
                    || existing.handler != resource.handler;
                if conflicting {
                    return Err(UpgradeError::ConflictingResource(name.to_string()));
                }
                for usage in resource.usage {
                    if !existing.usage.contains(&usage) {
                        existing.usage.push(usage);
                    }
                }
            },
        }
    }

    Ok(resources)
}

/// Where a function's code lands in the v2 layout.
///
/// Code already under `lambda/` keeps its location; anything else moves to
/// `lambda/<function-name>`.
fn v2_code_uri(function_name: &str, code_uri: &str) -> String {
    let code_uri = code_uri.trim_end_matches('/');
    if code_uri == paths::LAMBDA_DIR
        || code_uri.starts_with(&format!("{}/", paths::LAMBDA_DIR))
    {
        code_uri.to_string()
    } else {
        format!("{}/{function_name}", paths::LAMBDA_DIR)
    }
}
