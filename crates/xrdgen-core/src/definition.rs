//! Composite resource definition types
//!
//! A `CompositeResourceDefinition` describes a custom API type (the composite
//! resource) and, optionally, a namespaced claim type that shares its schema.
//! Both are later turned into CustomResourceDefinitions by `xrdgen-crd`.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinitionNames, CustomResourceValidation, JSONSchemaProps,
};
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Specification of a composite resource definition
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[kube(
    group = "apiextensions.crossplane.io",
    version = "v1alpha1",
    kind = "CompositeResourceDefinition",
    derive = "PartialEq",
    derive = "Default",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResourceDefinitionSpec {
    /// Names of the optional claim type. Claims inherit the composite schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_names: Option<CustomResourceDefinitionNames>,

    /// Template of the composite resource CRD
    pub crd_spec_template: CrdSpecTemplate,
}

/// The parts of a CRD the definition author controls
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdSpecTemplate {
    /// API group (e.g., "example.org")
    pub group: String,
    /// Served and storage version (e.g., "v1alpha1")
    pub version: String,
    /// Kind, listKind, singular and plural of the composite resource
    pub names: CustomResourceDefinitionNames,
    /// Partial OpenAPI v3 schema describing only the custom `spec` fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<CustomResourceValidation>,
}

impl CompositeResourceDefinition {
    /// Names of the composite resource
    pub fn composite_names(&self) -> &CustomResourceDefinitionNames {
        &self.spec.crd_spec_template.names
    }

    /// Names of the claim, if this definition offers one
    pub fn claim_names(&self) -> Option<&CustomResourceDefinitionNames> {
        self.spec.claim_names.as_ref()
    }

    /// Check if this definition offers a claim type
    pub fn offers_claim(&self) -> bool {
        self.spec.claim_names.is_some()
    }

    /// API group shared by the composite and claim types
    pub fn group(&self) -> &str {
        &self.spec.crd_spec_template.group
    }

    /// API version shared by the composite and claim types
    pub fn version(&self) -> &str {
        &self.spec.crd_spec_template.version
    }

    /// The user-authored schema fragment, if any
    pub fn schema_fragment(&self) -> Option<&JSONSchemaProps> {
        self.spec
            .crd_spec_template
            .validation
            .as_ref()
            .and_then(|v| v.open_api_v3_schema.as_ref())
    }
}
