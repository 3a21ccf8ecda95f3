//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - v1 project and global config builders
//! - `mock_smapi.rs` - in-process skill-management API for client tests

pub mod mock_smapi;
