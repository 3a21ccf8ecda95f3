//! Tests for function code relocation (self-managed skills)

use std::fs;

use skillkit::models::ResourcesConfig;
use skillkit::upgrade::UpgradeError;
use skillkit::upgrade::code::handle_existing_lambda_code;
use skillkit::upgrade::detect::extract_upgrade_information;
use skillkit::upgrade::layout::{create_v2_skeleton, move_project_to_legacy};
use tempfile::TempDir;

use crate::common::fixtures::V1ProjectBuilder;

#[test]
fn test_code_is_relocated_and_registered() {
    let temp = TempDir::new().unwrap();
    V1ProjectBuilder::new().lambda("hello-fn", "src/hello").build(temp.path());

    let info = extract_upgrade_information(temp.path(), "default").unwrap();
    move_project_to_legacy(temp.path()).unwrap();
    create_v2_skeleton(temp.path(), "default").unwrap();

    handle_existing_lambda_code(temp.path(), &info, "default").unwrap();

    // code copied to its v2 location, legacy copy kept
    assert!(temp.path().join("lambda/hello-fn/index.js").is_file());
    assert!(temp.path().join("legacy/src/hello/index.js").is_file());

    let config = ResourcesConfig::load(&temp.path().join("skill-resources.json")).unwrap();
    let profile = config.require_profile("default").unwrap();
    assert_eq!(profile.code["hello-fn"].src, "./lambda/hello-fn");

    let infra = profile.skill_infrastructure.as_ref().unwrap();
    assert_eq!(infra.user_config.runtime.as_deref(), Some("nodejs18.x"));
    assert_eq!(infra.user_config.handler.as_deref(), Some("index.handler"));
}

#[test]
fn test_missing_legacy_code_is_an_error() {
    let temp = TempDir::new().unwrap();
    V1ProjectBuilder::new().lambda("hello-fn", "src/hello").build(temp.path());

    let info = extract_upgrade_information(temp.path(), "default").unwrap();
    move_project_to_legacy(temp.path()).unwrap();
    create_v2_skeleton(temp.path(), "default").unwrap();

    fs::remove_dir_all(temp.path().join("legacy/src/hello")).unwrap();

    let err = handle_existing_lambda_code(temp.path(), &info, "default").unwrap_err();
    assert!(matches!(err, UpgradeError::MissingLegacyCode { function, .. } if function == "hello-fn"));
}

#[test]
fn test_no_lambda_resources_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    V1ProjectBuilder::new().build(temp.path());

    let info = extract_upgrade_information(temp.path(), "default").unwrap();
    move_project_to_legacy(temp.path()).unwrap();
    create_v2_skeleton(temp.path(), "default").unwrap();

    handle_existing_lambda_code(temp.path(), &info, "default").unwrap();

    let config = ResourcesConfig::load(&temp.path().join("skill-resources.json")).unwrap();
    let profile = config.require_profile("default").unwrap();
    assert!(profile.code.is_empty());
    assert!(profile.skill_infrastructure.is_none());
}
