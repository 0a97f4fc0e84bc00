//! Owner references from generated CRDs back to their definition

use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::Resource;
use xrdgen_core::CompositeResourceDefinition;

/// Builds the controller reference a generated CRD carries
pub trait OwnerLinker: Send + Sync {
    /// A controller reference to the definition, or `None` if the definition
    /// cannot be referenced (e.g. it has no uid yet)
    fn controller_ref(&self, definition: &CompositeResourceDefinition) -> Option<OwnerReference>;
}

/// Controller reference with `controller` and `blockOwnerDeletion` set
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerOwnerRef;

impl OwnerLinker for ControllerOwnerRef {
    fn controller_ref(&self, definition: &CompositeResourceDefinition) -> Option<OwnerReference> {
        let reference = definition.controller_owner_ref(&())?;
        Some(OwnerReference {
            controller: Some(true),
            block_owner_deletion: Some(true),
            ..reference
        })
    }
}
