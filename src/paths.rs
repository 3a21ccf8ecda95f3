//! Centralized path definitions for skillkit
//!
//! This module is the single source of truth for the files skillkit reads
//! and writes, both inside a skill project and at the user level.
//!
//! ## Project Layout
//!
//! ### Legacy (v1) project
//!
//! ```text
//! project/
//! ├── .skill/config            # v1 project config (JSON, per-profile deploy settings)
//! ├── skill.json               # v1 manifest (opaque to the upgrade)
//! ├── models/...               # v1 interaction models (opaque to the upgrade)
//! └── lambda/...               # user code
//! ```
//!
//! ### Upgraded (v2) project
//!
//! ```text
//! project/
//! ├── legacy/                  # the entire v1 tree, moved aside
//! ├── skill-package/           # skill metadata imported from the service
//! ├── lambda/                  # relocated user code
//! ├── skill-resources.json     # v2 resources config
//! └── .skill/states.json       # deployment states (hosted skills)
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.config/skillkit/
//! └── config.toml              # profiles, tokens, vendor ids
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Project-level paths (per skill project)
// =============================================================================

/// Directory holding skillkit's project-local state
pub const SKILL_DIR: &str = ".skill";

/// v1 project config filename (inside [`SKILL_DIR`])
pub const V1_CONFIG_FILE: &str = "config";

/// v2 resources config filename (project root)
pub const RESOURCES_CONFIG_FILE: &str = "skill-resources.json";

/// Deployment states filename (inside [`SKILL_DIR`], hosted skills only)
pub const STATES_FILE: &str = "states.json";

/// Folder the v1 project content is moved into during the upgrade
pub const LEGACY_DIR: &str = "legacy";

/// Folder the skill package is imported into
pub const SKILL_PACKAGE_DIR: &str = "skill-package";

/// Folder holding function code in the v2 layout
pub const LAMBDA_DIR: &str = "lambda";

/// Git metadata directory; never moved or deleted by the upgrade
pub const GIT_DIR: &str = ".git";

/// Get path to the v1 project config (`.skill/config`).
#[must_use]
pub fn v1_config(root: &Path) -> PathBuf {
    root.join(SKILL_DIR).join(V1_CONFIG_FILE)
}

/// Get path to the v2 resources config (`skill-resources.json`).
#[must_use]
pub fn resources_config(root: &Path) -> PathBuf {
    root.join(RESOURCES_CONFIG_FILE)
}

/// Get path to the deployment states file (`.skill/states.json`).
#[must_use]
pub fn states_file(root: &Path) -> PathBuf {
    root.join(SKILL_DIR).join(STATES_FILE)
}

/// Get path to the `legacy/` folder.
#[must_use]
pub fn legacy_dir(root: &Path) -> PathBuf {
    root.join(LEGACY_DIR)
}

/// Get path to the `skill-package/` folder.
#[must_use]
pub fn skill_package_dir(root: &Path) -> PathBuf {
    root.join(SKILL_PACKAGE_DIR)
}

/// Get path to the `lambda/` folder.
#[must_use]
pub fn lambda_dir(root: &Path) -> PathBuf {
    root.join(LAMBDA_DIR)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name (under the XDG config dir)
const GLOBAL_DIR: &str = "skillkit";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global skillkit config directory.
///
/// Returns `~/.config/skillkit/` (respects `XDG_CONFIG_HOME`).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/skillkit/config.toml`.
/// Contains profiles with their tokens and vendor ids.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
