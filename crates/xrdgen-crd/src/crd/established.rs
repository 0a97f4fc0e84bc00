//! CRD establishment checks
//!
//! The API server sets the `Established` condition once it serves a newly
//! registered CRD. Reconcilers poll it before creating custom resources.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionCondition, CustomResourceDefinitionStatus,
};

/// Condition type set by the API server once a CRD is served
pub const ESTABLISHED: &str = "Established";

/// Check if a CRD status reports the CRD as established
pub fn is_established(status: &CustomResourceDefinitionStatus) -> bool {
    conditions_established(status.conditions.as_deref().unwrap_or_default())
}

/// Check a condition list for `Established=True`
///
/// The first `Established` condition decides; duplicates are ignored.
pub fn conditions_established(conditions: &[CustomResourceDefinitionCondition]) -> bool {
    conditions
        .iter()
        .find(|c| c.type_ == ESTABLISHED)
        .is_some_and(|c| c.status == "True")
}

/// Check if a fetched CRD is established
pub fn crd_is_established(crd: &CustomResourceDefinition) -> bool {
    crd.status.as_ref().is_some_and(is_established)
}
