//! Rendering of generated CRDs for submission and diffing
//!
//! Schema properties, labels and annotations are sorted maps, so rendering the
//! same CRD always yields the same bytes.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;

use crate::error::Result;

/// Render a CRD as a YAML document
pub fn to_yaml(crd: &CustomResourceDefinition) -> Result<String> {
    Ok(serde_yaml::to_string(crd)?)
}

/// Render a CRD as pretty-printed JSON
pub fn to_json_pretty(crd: &CustomResourceDefinition) -> Result<String> {
    Ok(serde_json::to_string_pretty(crd)?)
}

/// Render several CRDs as one multi-document YAML stream
pub fn to_yaml_documents<'a>(
    crds: impl IntoIterator<Item = &'a CustomResourceDefinition>,
) -> Result<String> {
    let docs = crds.into_iter().map(to_yaml).collect::<Result<Vec<_>>>()?;
    Ok(docs.join("---\n"))
}
