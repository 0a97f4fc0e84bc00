//! Generated schema properties
//!
//! Fixed property tables merged into every generated CRD. They are built once
//! and cloned per merge, so no caller can observe another caller's changes.

use std::collections::BTreeMap;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    JSON, JSONSchemaProps, JSONSchemaPropsOrArray, JSONSchemaPropsOrBool,
};
use once_cell::sync::Lazy;

/// Schema property table keyed by property name
pub type PropertyTable = BTreeMap<String, JSONSchemaProps>;

/// Binding phases a composite resource or claim may report
pub const BINDING_PHASES: [&str; 4] = ["Unbindable", "Unbound", "Bound", "Released"];

/// Spec properties generated for composite resources
pub static COMPOSITE_SPEC_PROPS: Lazy<PropertyTable> = Lazy::new(|| {
    table([
        ("compositionRef", composition_ref()),
        ("compositionSelector", composition_selector()),
        (
            "claimRef",
            object(
                &["apiVersion", "kind", "namespace", "name"],
                [
                    ("apiVersion", string()),
                    ("kind", string()),
                    ("namespace", string()),
                    ("name", string()),
                ],
            ),
        ),
        (
            "resourceRefs",
            array(object(
                &["apiVersion", "kind", "name"],
                [
                    ("apiVersion", string()),
                    ("name", string()),
                    ("kind", string()),
                    ("uid", string()),
                ],
            )),
        ),
        (
            "writeConnectionSecretToRef",
            object(
                &["name", "namespace"],
                [("name", string()), ("namespace", string())],
            ),
        ),
    ])
});

/// Spec properties generated for claims
///
/// Claims are namespaced, so their connection secret reference carries no
/// namespace of its own.
pub static CLAIM_SPEC_PROPS: Lazy<PropertyTable> = Lazy::new(|| {
    table([
        ("compositionRef", composition_ref()),
        ("compositionSelector", composition_selector()),
        (
            "resourceRef",
            object(
                &["apiVersion", "kind", "name"],
                [
                    ("apiVersion", string()),
                    ("kind", string()),
                    ("name", string()),
                ],
            ),
        ),
        (
            "writeConnectionSecretToRef",
            object(&["name"], [("name", string())]),
        ),
    ])
});

/// Status properties shared by composite resources and claims
pub static STATUS_PROPS: Lazy<PropertyTable> = Lazy::new(|| {
    table([
        ("composedResources", integer()),
        ("readyResources", integer()),
        ("bindingPhase", string_enum(&BINDING_PHASES)),
        ("conditions", conditions()),
    ])
});

fn composition_ref() -> JSONSchemaProps {
    object(&["name"], [("name", string())])
}

fn composition_selector() -> JSONSchemaProps {
    let match_labels = JSONSchemaProps {
        type_: Some("object".to_string()),
        additional_properties: Some(JSONSchemaPropsOrBool::Schema(Box::new(string()))),
        ..Default::default()
    };
    object(&["matchLabels"], [("matchLabels", match_labels)])
}

fn conditions() -> JSONSchemaProps {
    let last_transition_time = JSONSchemaProps {
        format: Some("date-time".to_string()),
        ..string()
    };
    let condition = object(
        &["lastTransitionTime", "reason", "status", "type"],
        [
            ("lastTransitionTime", last_transition_time),
            ("message", string()),
            ("reason", string()),
            ("status", string()),
            ("type", string()),
        ],
    );

    JSONSchemaProps {
        description: Some("Conditions of the resource.".to_string()),
        ..array(condition)
    }
}

fn table<const N: usize>(entries: [(&str, JSONSchemaProps); N]) -> PropertyTable {
    entries
        .into_iter()
        .map(|(name, prop)| (name.to_string(), prop))
        .collect()
}

/// A property of the given scalar type
pub(crate) fn typed(type_: &str) -> JSONSchemaProps {
    JSONSchemaProps {
        type_: Some(type_.to_string()),
        ..Default::default()
    }
}

pub(crate) fn string() -> JSONSchemaProps {
    typed("string")
}

fn integer() -> JSONSchemaProps {
    typed("integer")
}

fn string_enum(values: &[&str]) -> JSONSchemaProps {
    JSONSchemaProps {
        enum_: Some(
            values
                .iter()
                .map(|v| JSON(serde_json::Value::String((*v).to_string())))
                .collect(),
        ),
        ..string()
    }
}

fn object<const N: usize>(
    required: &[&str],
    properties: [(&str, JSONSchemaProps); N],
) -> JSONSchemaProps {
    JSONSchemaProps {
        type_: Some("object".to_string()),
        required: Some(required.iter().map(|r| (*r).to_string()).collect()),
        properties: Some(table(properties)),
        ..Default::default()
    }
}

fn array(items: JSONSchemaProps) -> JSONSchemaProps {
    JSONSchemaProps {
        type_: Some("array".to_string()),
        items: Some(JSONSchemaPropsOrArray::Schema(Box::new(items))),
        ..Default::default()
    }
}
