//! xrdgen Core - Core types for composite resource definitions
//!
//! This crate provides the input side of CRD synthesis:
//! - `CompositeResourceDefinition`: The user-authored definition of a composite
//!   resource type and its optional claim
//! - `DefinitionLoader`: Decode definitions from YAML/JSON manifests

pub mod definition;
pub mod error;
pub mod loader;

pub use definition::{CompositeResourceDefinition, CompositeResourceDefinitionSpec, CrdSpecTemplate};
pub use error::{CoreError, Result};
pub use loader::DefinitionLoader;
