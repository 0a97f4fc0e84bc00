//! CRD (CustomResourceDefinition) synthesis for composite resources
//!
//! This module turns a `CompositeResourceDefinition` into the CRDs the API
//! server needs to serve its composite resource and, optionally, its claim:
//!
//! - **Names** (`names`): Reject claim names that overlap composite names
//! - **Properties** (`props`): Generated spec and status schema tables
//! - **Merging** (`merge`): Combine the user schema fragment with generated properties
//! - **Modes** (`mode`): Per-CRD configuration (scope, printer columns, names)
//! - **Assembly** (`assemble`): Build the complete CRD object
//! - **Establishment** (`established`): Check whether a CRD is being served
//! - **Rendering** (`render`): Serialize CRDs for submission
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    CRD Synthesis Pipeline                    │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │   Definition ──► Names ──► Assembler ──► CRD (composite)     │
//! │      │          (claim       │     ▲                         │
//! │      │           only)       ▼     │                         │
//! │      └─ schema fragment ─► SchemaMerger ──► CRD (claim)      │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use xrdgen_core::DefinitionLoader;
//! use xrdgen_crd::crd::{GenerationMode, assemble};
//!
//! let definition = DefinitionLoader::from_yaml(yaml)?;
//! let composite = assemble(&definition, GenerationMode::Composite)?;
//! if definition.offers_claim() {
//!     let claim = assemble(&definition, GenerationMode::Claim)?;
//! }
//! ```

mod assemble;
mod established;
mod merge;
mod mode;
mod names;
mod owner;
mod props;
mod render;

// Assembly
pub use assemble::{CrdGenerator, GeneratedCrds, assemble, assemble_all};

// Modes
pub use mode::{CrdScope, GenerationMode, PrinterColumn};

// Schema
pub use merge::SchemaMerger;
pub use props::{
    BINDING_PHASES, CLAIM_SPEC_PROPS, COMPOSITE_SPEC_PROPS, PropertyTable, STATUS_PROPS,
};

// Validation
pub use names::validate_claim_names;

// Owner references
pub use owner::{ControllerOwnerRef, OwnerLinker};

// Status
pub use established::{ESTABLISHED, conditions_established, crd_is_established, is_established};

// Rendering
pub use render::{to_json_pretty, to_yaml, to_yaml_documents};
