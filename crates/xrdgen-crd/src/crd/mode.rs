//! Generation modes
//!
//! A definition yields up to two CRDs: one for the composite resource and one
//! for its claim. Everything that differs between the two is captured in a
//! static `ModeConfig` selected up front.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceColumnDefinition, CustomResourceDefinitionNames,
};
use once_cell::sync::Lazy;
use xrdgen_core::CompositeResourceDefinition;

use super::names::validate_claim_names;
use super::props::{CLAIM_SPEC_PROPS, COMPOSITE_SPEC_PROPS, PropertyTable};
use crate::error::{CrdError, Result};

/// Which CRD to generate from a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationMode {
    /// The cluster scoped composite resource
    Composite,
    /// The namespaced claim for the composite resource
    Claim,
}

impl GenerationMode {
    /// The static configuration for this mode
    pub(crate) fn config(self) -> &'static ModeConfig {
        match self {
            Self::Composite => &COMPOSITE,
            Self::Claim => &CLAIM,
        }
    }

    /// Resource scope of CRDs generated in this mode
    pub fn scope(self) -> CrdScope {
        self.config().scope
    }

    /// Printer columns of CRDs generated in this mode, in display order
    pub fn printer_columns(self) -> &'static [PrinterColumn] {
        self.config().printer_columns
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Composite => write!(f, "composite"),
            Self::Claim => write!(f, "claim"),
        }
    }
}

/// CRD scope - whether resources are namespaced or cluster-wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrdScope {
    Namespaced,
    Cluster,
}

impl CrdScope {
    /// Value of `spec.scope` in a CustomResourceDefinition
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Namespaced => "Namespaced",
            Self::Cluster => "Cluster",
        }
    }
}

impl std::fmt::Display for CrdScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Printer column for kubectl output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterColumn {
    /// Column name shown in kubectl output
    pub name: &'static str,
    /// JSON path to extract value
    pub json_path: &'static str,
}

impl PrinterColumn {
    /// The column as it appears in `additionalPrinterColumns`
    pub fn to_definition(self) -> CustomResourceColumnDefinition {
        CustomResourceColumnDefinition {
            name: self.name.to_string(),
            type_: "string".to_string(),
            json_path: self.json_path.to_string(),
            ..Default::default()
        }
    }
}

const READY: PrinterColumn = PrinterColumn {
    name: "READY",
    json_path: ".status.conditions[?(@.type=='Ready')].status",
};

const SYNCED: PrinterColumn = PrinterColumn {
    name: "SYNCED",
    json_path: ".status.conditions[?(@.type=='Synced')].status",
};

const COMPOSITION: PrinterColumn = PrinterColumn {
    name: "COMPOSITION",
    json_path: ".spec.compositionRef.name",
};

const CONNECTION_SECRET: PrinterColumn = PrinterColumn {
    name: "CONNECTION-SECRET",
    json_path: ".spec.writeConnectionSecretToRef.name",
};

/// Everything that differs between the composite and claim CRDs
pub(crate) struct ModeConfig {
    pub scope: CrdScope,
    pub spec_props: &'static Lazy<PropertyTable>,
    pub printer_columns: &'static [PrinterColumn],
    pub names: fn(&CompositeResourceDefinition) -> Result<&CustomResourceDefinitionNames>,
}

static COMPOSITE: ModeConfig = ModeConfig {
    scope: CrdScope::Cluster,
    spec_props: &COMPOSITE_SPEC_PROPS,
    printer_columns: &[READY, SYNCED, COMPOSITION],
    names: composite_names,
};

static CLAIM: ModeConfig = ModeConfig {
    scope: CrdScope::Namespaced,
    spec_props: &CLAIM_SPEC_PROPS,
    printer_columns: &[READY, SYNCED, CONNECTION_SECRET],
    names: claim_names,
};

fn composite_names(d: &CompositeResourceDefinition) -> Result<&CustomResourceDefinitionNames> {
    Ok(d.composite_names())
}

fn claim_names(d: &CompositeResourceDefinition) -> Result<&CustomResourceDefinitionNames> {
    validate_claim_names(d)?;
    d.claim_names().ok_or(CrdError::MissingClaimNames)
}
