//! What the upgrade-eligibility check extracts from a v1 project

use std::collections::BTreeMap;

use serde::Serialize;

/// Everything the upgrade needs to know about a v1 project
#[derive(Debug, Clone, Serialize)]
pub struct UpgradeInfo {
    /// The skill id recorded in the v1 deploy settings
    pub skill_id: String,
    /// Whether the skill is hosted (code lives with the service)
    pub is_hosted: bool,
    /// Validated function resources, keyed by function name.
    ///
    /// Always empty for hosted skills. Keyed with a `BTreeMap` so previews
    /// and generated configs come out in a stable order.
    pub lambda_resources: BTreeMap<String, LambdaResource>,
}

/// A validated v1 function resource and its v2 destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LambdaResource {
    /// Which skill endpoints this function serves
    pub usage: Vec<String>,
    /// v1 code location, relative to the project root
    pub code_uri: String,
    /// Where the code lands in the v2 layout
    pub v2_code_uri: String,
    /// Function runtime
    pub runtime: Option<String>,
    /// Function handler
    pub handler: Option<String>,
    /// Last deployed revision id
    pub revision_id: Option<String>,
    /// Deployed function ARN
    pub arn: Option<String>,
}

impl UpgradeInfo {
    /// Build the info for a hosted skill (no lambda resources carried over)
    #[must_use]
    pub fn hosted(skill_id: String) -> Self {
        Self {
            skill_id,
            is_hosted: true,
            lambda_resources: BTreeMap::new(),
        }
    }
}
