//! Definition manifest loader
//!
//! Decodes `CompositeResourceDefinition` manifests from YAML or JSON, either
//! one document at a time or from `---` separated multi-document streams.

use std::path::Path;

use kube::Resource;
use serde_json::Value;

use crate::definition::CompositeResourceDefinition;
use crate::error::{CoreError, Result};

/// Loader for definition manifests
pub struct DefinitionLoader;

impl DefinitionLoader {
    /// Decode a single definition from a YAML document
    pub fn from_yaml(yaml: &str) -> Result<CompositeResourceDefinition> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Decode a single definition from a JSON document
    pub fn from_json(json: &str) -> Result<CompositeResourceDefinition> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decode from a serde_json::Value (useful for dynamic objects)
    pub fn from_value(value: Value) -> Result<CompositeResourceDefinition> {
        let expected_api_version = CompositeResourceDefinition::api_version(&());
        let expected_kind = CompositeResourceDefinition::kind(&());

        let api_version = value.get("apiVersion").and_then(Value::as_str).unwrap_or("");
        let kind = value.get("kind").and_then(Value::as_str).unwrap_or("");

        if api_version != expected_api_version || kind != expected_kind {
            return Err(CoreError::UnexpectedKind {
                expected: format!("{}, Kind={}", expected_api_version, expected_kind),
                found: format!("{}, Kind={}", api_version, kind),
            });
        }

        serde_json::from_value(value).map_err(|e| CoreError::InvalidDefinition(e.to_string()))
    }

    /// Decode every definition in a multi-document YAML stream
    ///
    /// Empty and comment-only documents are skipped.
    pub fn from_yaml_documents(content: &str) -> Result<Vec<CompositeResourceDefinition>> {
        split_documents(content)
            .into_iter()
            .map(|doc| Self::from_yaml(&doc))
            .collect()
    }

    /// Read a manifest file and decode every definition in it
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<CompositeResourceDefinition>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let definitions = Self::from_yaml_documents(&content)?;

        tracing::debug!(
            "Loaded {} definition(s) from {}",
            definitions.len(),
            path.display()
        );

        Ok(definitions)
    }
}

/// Split a YAML stream on document separator lines
fn split_documents(content: &str) -> Vec<String> {
    let mut docs = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed.starts_with("--- ") {
            docs.push(std::mem::take(&mut current));
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }
    docs.push(current);

    docs.into_iter()
        .filter(|doc| {
            !doc
                .lines()
                .all(|l| l.trim().is_empty() || l.trim().starts_with('#'))
        })
        .collect()
}
