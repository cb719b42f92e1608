//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Mesh and scene builders, OBJ and manifest text
//! - `mocks.rs` - Test doubles for the port traits
