//! xrdgen CRD - CustomResourceDefinition synthesis for composite resources
//!
//! This crate provides:
//! - **Schema Merging**: Combine user-authored spec schemas with generated
//!   reference, selector and status properties
//! - **Claim Validation**: Catch claim names the API server would reject
//! - **CRD Assembly**: Build the composite and claim CRDs of a definition
//! - **Establishment**: Check whether the API server serves a CRD
//!
//! All operations are pure computations; submitting the generated CRDs to a
//! cluster is left to the caller.

pub mod crd;
pub mod error;

pub use crd::{
    CrdGenerator, CrdScope, GeneratedCrds, GenerationMode, OwnerLinker, SchemaMerger, assemble,
    assemble_all, is_established, validate_claim_names,
};
pub use error::{CrdError, Result};
