//! Command implementations

mod upgrade_project;

pub use upgrade_project::upgrade_project;
