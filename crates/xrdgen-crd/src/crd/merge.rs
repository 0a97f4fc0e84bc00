//! Schema merging
//!
//! Combines the user-authored schema fragment, which may only describe the
//! custom `spec` fields, with the generated envelope, spec reference fields
//! and status fields into a complete OpenAPI v3 schema.

use std::collections::BTreeMap;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::JSONSchemaProps;

use super::mode::GenerationMode;
use super::props::{STATUS_PROPS, string, typed};
use crate::error::{CrdError, Result};

/// Merges schema fragments with generated properties
pub struct SchemaMerger;

impl SchemaMerger {
    /// Build the complete schema for a CRD generated in the given mode
    ///
    /// The result always has exactly the root properties `apiVersion`,
    /// `kind`, `metadata`, `spec` and `status`. Spec properties of the
    /// fragment are kept verbatim; generated spec property names are
    /// reserved.
    pub fn merge(
        fragment: Option<&JSONSchemaProps>,
        mode: GenerationMode,
    ) -> Result<JSONSchemaProps> {
        let mut spec = match fragment {
            Some(fragment) => Self::template_spec(fragment)?,
            None => JSONSchemaProps::default(),
        };
        spec.type_ = Some("object".to_string());

        let properties = spec.properties.get_or_insert_with(BTreeMap::new);
        for (name, prop) in mode.config().spec_props.iter() {
            if properties.contains_key(name) {
                return Err(CrdError::ReservedFieldName { name: name.clone() });
            }
            properties.insert(name.clone(), prop.clone());
        }

        let status = JSONSchemaProps {
            properties: Some(STATUS_PROPS.clone()),
            ..typed("object")
        };

        let mut root = BTreeMap::new();
        root.insert("apiVersion".to_string(), string());
        root.insert("kind".to_string(), string());
        // The API server validates metadata itself.
        root.insert("metadata".to_string(), typed("object"));
        root.insert("spec".to_string(), spec);
        root.insert("status".to_string(), status);

        Ok(JSONSchemaProps {
            properties: Some(root),
            ..typed("object")
        })
    }

    /// Extract the `spec` node of a fragment, rejecting anything above it
    fn template_spec(fragment: &JSONSchemaProps) -> Result<JSONSchemaProps> {
        if let Some(type_) = fragment.type_.as_deref() {
            if type_ != "object" {
                return Err(CrdError::MalformedTemplateSchema(format!(
                    "root type must be object, got {}",
                    type_
                )));
            }
        }

        let above_spec = JSONSchemaProps {
            type_: None,
            properties: None,
            ..fragment.clone()
        };
        if above_spec != JSONSchemaProps::default() {
            return Err(CrdError::MalformedTemplateSchema(
                "only type and properties.spec may be set at the root".to_string(),
            ));
        }

        let Some(properties) = fragment.properties.as_ref() else {
            return Ok(JSONSchemaProps::default());
        };

        if let Some(unexpected) = properties.keys().find(|name| name.as_str() != "spec") {
            return Err(CrdError::MalformedTemplateSchema(format!(
                "unexpected root property '{}', only spec may be described",
                unexpected
            )));
        }

        let Some(spec) = properties.get("spec") else {
            return Ok(JSONSchemaProps::default());
        };

        if let Some(type_) = spec.type_.as_deref() {
            if type_ != "object" {
                return Err(CrdError::MalformedTemplateSchema(format!(
                    "spec type must be object, got {}",
                    type_
                )));
            }
        }

        // Anything besides fields, required and description would loosen or
        // conflict with the generated properties.
        let other_keywords = JSONSchemaProps {
            type_: None,
            properties: None,
            required: None,
            description: None,
            ..spec.clone()
        };
        if other_keywords != JSONSchemaProps::default() {
            return Err(CrdError::MalformedTemplateSchema(
                "only type, properties, required and description may be set on spec".to_string(),
            ));
        }

        Ok(JSONSchemaProps {
            properties: spec.properties.clone(),
            required: spec.required.clone(),
            description: spec.description.clone(),
            ..Default::default()
        })
    }
}
