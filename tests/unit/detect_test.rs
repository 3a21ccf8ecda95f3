//! Tests for upgrade-eligibility detection

use std::fs;

use skillkit::upgrade::UpgradeError;
use skillkit::upgrade::detect::extract_upgrade_information;
use tempfile::TempDir;

use crate::common::fixtures::{SKILL_ID, V1ProjectBuilder};

#[test]
fn test_empty_dir_is_not_a_v1_project() {
    let temp = TempDir::new().unwrap();

    let err = extract_upgrade_information(temp.path(), "default").unwrap_err();
    assert!(matches!(err, UpgradeError::NotV1Project(_)));
}

#[test]
fn test_already_upgraded_project_is_rejected() {
    let temp = TempDir::new().unwrap();
    V1ProjectBuilder::new().build(temp.path());
    fs::write(temp.path().join("skill-resources.json"), "{}").unwrap();

    let err = extract_upgrade_information(temp.path(), "default").unwrap_err();
    assert!(matches!(err, UpgradeError::AlreadyUpgraded));
}

#[test]
fn test_missing_profile_means_missing_skill_id() {
    let temp = TempDir::new().unwrap();
    V1ProjectBuilder::new().profile("other").build(temp.path());

    let err = extract_upgrade_information(temp.path(), "default").unwrap_err();
    assert!(matches!(err, UpgradeError::MissingSkillId(profile) if profile == "default"));
}

#[test]
fn test_missing_skill_id_is_rejected() {
    let temp = TempDir::new().unwrap();
    V1ProjectBuilder::new().skill_id(None).build(temp.path());

    let err = extract_upgrade_information(temp.path(), "default").unwrap_err();
    assert!(matches!(err, UpgradeError::MissingSkillId(_)));
}

#[test]
fn test_malformed_skill_id_is_rejected() {
    let temp = TempDir::new().unwrap();
    V1ProjectBuilder::new().skill_id(Some("not-a-skill-id")).build(temp.path());

    let err = extract_upgrade_information(temp.path(), "default").unwrap_err();
    assert!(matches!(err, UpgradeError::MalformedSkillId(_)));
}

#[test]
fn test_hosted_skill_detection() {
    let temp = TempDir::new().unwrap();
    V1ProjectBuilder::new().hosted().build(temp.path());

    let info = extract_upgrade_information(temp.path(), "default").unwrap();
    assert!(info.is_hosted);
    assert_eq!(info.skill_id, SKILL_ID);
    assert!(info.lambda_resources.is_empty());
}

#[test]
fn test_lambda_resources_are_collected() {
    let temp = TempDir::new().unwrap();
    V1ProjectBuilder::new()
        .lambda("hello-fn", "src/hello")
        .lambda("other-fn", "lambda/custom")
        .build(temp.path());

    let info = extract_upgrade_information(temp.path(), "default").unwrap();
    assert!(!info.is_hosted);
    assert_eq!(info.lambda_resources.len(), 2);

    // code outside lambda/ moves under lambda/<function-name>
    let hello = &info.lambda_resources["hello-fn"];
    assert_eq!(hello.code_uri, "src/hello");
    assert_eq!(hello.v2_code_uri, "lambda/hello-fn");

    // code already under lambda/ keeps its location
    let other = &info.lambda_resources["other-fn"];
    assert_eq!(other.v2_code_uri, "lambda/custom");
}

#[test]
fn test_duplicate_entries_merge_usage() {
    let temp = TempDir::new().unwrap();
    let config = serde_json::json!({
        "deploy_settings": {
            "default": {
                "skill_id": SKILL_ID,
                "resources": { "lambda": [
                    {
                        "usage": ["custom/default"],
                        "function_name": "hello-fn",
                        "code_uri": "src/hello",
                    },
                    {
                        "usage": ["smarthome/default"],
                        "function_name": "hello-fn",
                        "code_uri": "src/hello",
                    },
                ]},
            }
        }
    });
    fs::create_dir_all(temp.path().join(".skill")).unwrap();
    fs::write(temp.path().join(".skill/config"), config.to_string()).unwrap();

    let info = extract_upgrade_information(temp.path(), "default").unwrap();
    let hello = &info.lambda_resources["hello-fn"];
    assert_eq!(hello.usage, vec!["custom/default", "smarthome/default"]);
}

#[test]
fn test_conflicting_entries_are_rejected() {
    let temp = TempDir::new().unwrap();
    let config = serde_json::json!({
        "deploy_settings": {
            "default": {
                "skill_id": SKILL_ID,
                "resources": { "lambda": [
                    {
                        "usage": ["custom/default"],
                        "function_name": "hello-fn",
                        "code_uri": "src/hello",
                    },
                    {
                        "usage": ["smarthome/default"],
                        "function_name": "hello-fn",
                        "code_uri": "src/elsewhere",
                    },
                ]},
            }
        }
    });
    fs::create_dir_all(temp.path().join(".skill")).unwrap();
    fs::write(temp.path().join(".skill/config"), config.to_string()).unwrap();

    let err = extract_upgrade_information(temp.path(), "default").unwrap_err();
    assert!(matches!(err, UpgradeError::ConflictingResource(name) if name == "hello-fn"));
}

#[test]
fn test_entry_without_usage_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config = serde_json::json!({
        "deploy_settings": {
            "default": {
                "skill_id": SKILL_ID,
                "resources": { "lambda": [
                    { "function_name": "hello-fn", "code_uri": "src/hello" },
                ]},
            }
        }
    });
    fs::create_dir_all(temp.path().join(".skill")).unwrap();
    fs::write(temp.path().join(".skill/config"), config.to_string()).unwrap();

    let err = extract_upgrade_information(temp.path(), "default").unwrap_err();
    assert!(matches!(err, UpgradeError::MissingUsage(name) if name == "hello-fn"));
}

#[test]
fn test_entry_without_code_uri_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config = serde_json::json!({
        "deploy_settings": {
            "default": {
                "skill_id": SKILL_ID,
                "resources": { "lambda": [
                    { "usage": ["custom/default"], "function_name": "hello-fn" },
                ]},
            }
        }
    });
    fs::create_dir_all(temp.path().join(".skill")).unwrap();
    fs::write(temp.path().join(".skill/config"), config.to_string()).unwrap();

    let err = extract_upgrade_information(temp.path(), "default").unwrap_err();
    assert!(matches!(err, UpgradeError::MissingCodeUri(name) if name == "hello-fn"));
}

#[test]
fn test_invalid_v1_config_is_rejected() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".skill")).unwrap();
    fs::write(temp.path().join(".skill/config"), "not json").unwrap();

    let err = extract_upgrade_information(temp.path(), "default").unwrap_err();
    assert!(matches!(err, UpgradeError::InvalidV1Config(_)));
}
