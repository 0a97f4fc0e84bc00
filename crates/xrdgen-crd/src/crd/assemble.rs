//! CRD assembly
//!
//! Turns a `CompositeResourceDefinition` into the CustomResourceDefinition of
//! its composite resource or of its claim.

use std::sync::Arc;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionSpec, CustomResourceDefinitionVersion,
    CustomResourceSubresourceStatus, CustomResourceSubresources, CustomResourceValidation,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use xrdgen_core::CompositeResourceDefinition;

use super::merge::SchemaMerger;
use super::mode::GenerationMode;
use super::owner::{ControllerOwnerRef, OwnerLinker};
use crate::error::{CrdError, Result};

/// The CRDs generated from one definition
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCrds {
    /// CRD of the composite resource
    pub composite: CustomResourceDefinition,
    /// CRD of the claim, if the definition offers one
    pub claim: Option<CustomResourceDefinition>,
}

impl GeneratedCrds {
    /// All generated CRDs, composite first
    pub fn iter(&self) -> impl Iterator<Item = &CustomResourceDefinition> {
        std::iter::once(&self.composite).chain(self.claim.as_ref())
    }
}

/// Generates CRDs from composite resource definitions
#[derive(Clone)]
pub struct CrdGenerator {
    owner: Arc<dyn OwnerLinker>,
}

impl Default for CrdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CrdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrdGenerator").finish_non_exhaustive()
    }
}

impl CrdGenerator {
    /// A generator that links CRDs to their definition with a controller reference
    pub fn new() -> Self {
        Self {
            owner: Arc::new(ControllerOwnerRef),
        }
    }

    /// Use a different owner reference builder
    pub fn with_owner_linker(mut self, owner: impl OwnerLinker + 'static) -> Self {
        self.owner = Arc::new(owner);
        self
    }

    /// Generate the CRD for the given mode
    ///
    /// In claim mode the claim names are validated first and any validation
    /// error is returned unchanged.
    pub fn generate(
        &self,
        d: &CompositeResourceDefinition,
        mode: GenerationMode,
    ) -> Result<CustomResourceDefinition> {
        let config = mode.config();
        let names = (config.names)(d)?.clone();
        let name = format!("{}.{}", names.plural, d.group());

        let owner = self
            .owner
            .controller_ref(d)
            .ok_or_else(|| CrdError::OwnerReference {
                name: d.metadata.name.clone().unwrap_or_default(),
            })?;

        let schema = SchemaMerger::merge(d.schema_fragment(), mode)?;

        let version = CustomResourceDefinitionVersion {
            name: d.version().to_string(),
            served: true,
            storage: true,
            schema: Some(CustomResourceValidation {
                open_api_v3_schema: Some(schema),
            }),
            subresources: Some(CustomResourceSubresources {
                status: Some(CustomResourceSubresourceStatus(serde_json::Value::Object(
                    serde_json::Map::new(),
                ))),
                scale: None,
            }),
            additional_printer_columns: Some(
                config
                    .printer_columns
                    .iter()
                    .map(|c| c.to_definition())
                    .collect(),
            ),
            ..Default::default()
        };

        tracing::debug!("Generated {} CRD {}", mode, name);

        Ok(CustomResourceDefinition {
            metadata: ObjectMeta {
                name: Some(name),
                labels: d.metadata.labels.clone(),
                annotations: d.metadata.annotations.clone(),
                owner_references: Some(vec![owner]),
                ..Default::default()
            },
            spec: CustomResourceDefinitionSpec {
                group: d.group().to_string(),
                names,
                scope: config.scope.to_string(),
                preserve_unknown_fields: Some(false),
                versions: vec![version],
                ..Default::default()
            },
            status: None,
        })
    }

    /// Generate the composite CRD and, if the definition offers one, the claim CRD
    pub fn generate_all(&self, d: &CompositeResourceDefinition) -> Result<GeneratedCrds> {
        let composite = self.generate(d, GenerationMode::Composite)?;
        let claim = if d.offers_claim() {
            Some(self.generate(d, GenerationMode::Claim)?)
        } else {
            None
        };

        Ok(GeneratedCrds { composite, claim })
    }
}

/// Generate the CRD for the given mode with the default generator
pub fn assemble(
    d: &CompositeResourceDefinition,
    mode: GenerationMode,
) -> Result<CustomResourceDefinition> {
    CrdGenerator::new().generate(d, mode)
}

/// Generate every CRD a definition describes with the default generator
pub fn assemble_all(d: &CompositeResourceDefinition) -> Result<GeneratedCrds> {
    CrdGenerator::new().generate_all(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinitionNames;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
    use xrdgen_core::{CompositeResourceDefinitionSpec, CrdSpecTemplate};

    fn names(kind: &str, plural: &str) -> CustomResourceDefinitionNames {
        CustomResourceDefinitionNames {
            kind: kind.to_string(),
            list_kind: Some(format!("{}List", kind)),
            singular: Some(kind.to_lowercase()),
            plural: plural.to_string(),
            ..Default::default()
        }
    }

    fn definition(claim: bool) -> CompositeResourceDefinition {
        let mut d = CompositeResourceDefinition::new(
            "coolcomposites.example.org",
            CompositeResourceDefinitionSpec {
                claim_names: claim.then(|| names("CoolClaim", "coolclaims")),
                crd_spec_template: CrdSpecTemplate {
                    group: "example.org".to_string(),
                    version: "v1alpha1".to_string(),
                    names: names("CoolComposite", "coolcomposites"),
                    validation: None,
                },
            },
        );
        d.metadata.uid = Some("you-you-eye-dee".to_string());
        d
    }

    struct FixedOwner;

    impl OwnerLinker for FixedOwner {
        fn controller_ref(&self, _: &CompositeResourceDefinition) -> Option<OwnerReference> {
            Some(OwnerReference {
                api_version: "example.org/v1".to_string(),
                kind: "Owner".to_string(),
                name: "owner".to_string(),
                uid: "owner-uid".to_string(),
                controller: Some(true),
                ..Default::default()
            })
        }
    }

    #[test]
    fn test_composite_crd() {
        let crd = assemble(&definition(false), GenerationMode::Composite).unwrap();

        assert_eq!(crd.metadata.name.as_deref(), Some("coolcomposites.example.org"));
        assert_eq!(crd.spec.scope, "Cluster");
        assert_eq!(crd.spec.names.kind, "CoolComposite");
        assert_eq!(crd.spec.preserve_unknown_fields, Some(false));
        assert_eq!(crd.spec.versions.len(), 1);

        let version = &crd.spec.versions[0];
        assert_eq!(version.name, "v1alpha1");
        assert!(version.served && version.storage);
        assert!(version.subresources.as_ref().unwrap().status.is_some());
    }

    #[test]
    fn test_claim_crd() {
        let crd = assemble(&definition(true), GenerationMode::Claim).unwrap();

        assert_eq!(crd.metadata.name.as_deref(), Some("coolclaims.example.org"));
        assert_eq!(crd.spec.scope, "Namespaced");
        assert_eq!(crd.spec.names.kind, "CoolClaim");
        assert_eq!(crd.spec.group, "example.org");
    }

    #[test]
    fn test_claim_mode_without_claim_names() {
        let err = assemble(&definition(false), GenerationMode::Claim).unwrap_err();
        assert_eq!(err, CrdError::MissingClaimNames);
    }

    #[test]
    fn test_claim_mode_propagates_conflicts() {
        let mut d = definition(true);
        d.spec.claim_names.as_mut().unwrap().kind = "CoolCompositeList".to_string();

        let err = assemble(&d, GenerationMode::Claim).unwrap_err();
        assert_eq!(
            err,
            CrdError::ConflictingClaimName {
                name: "CoolCompositeList".to_string()
            }
        );
        // The composite CRD does not depend on the claim names
        assert!(assemble(&d, GenerationMode::Composite).is_ok());
    }

    #[test]
    fn test_owner_reference_required() {
        let mut d = definition(false);
        d.metadata.uid = None;

        let err = assemble(&d, GenerationMode::Composite).unwrap_err();
        assert_eq!(
            err,
            CrdError::OwnerReference {
                name: "coolcomposites.example.org".to_string()
            }
        );
    }

    #[test]
    fn test_custom_owner_linker() {
        let generator = CrdGenerator::new().with_owner_linker(FixedOwner);
        let crd = generator
            .generate(&definition(false), GenerationMode::Composite)
            .unwrap();

        let owners = crd.metadata.owner_references.unwrap();
        assert_eq!(owners.len(), 1);
        assert_eq!(owners[0].name, "owner");
    }

    #[test]
    fn test_generate_all() {
        let crds = assemble_all(&definition(true)).unwrap();
        let names: Vec<_> = crds
            .iter()
            .map(|c| c.metadata.name.clone().unwrap())
            .collect();
        assert_eq!(names, ["coolcomposites.example.org", "coolclaims.example.org"]);

        let crds = assemble_all(&definition(false)).unwrap();
        assert!(crds.claim.is_none());
        assert_eq!(crds.iter().count(), 1);
    }

    #[test]
    fn test_labels_and_annotations_absent() {
        let crd = assemble(&definition(false), GenerationMode::Composite).unwrap();
        assert!(crd.metadata.labels.is_none());
        assert!(crd.metadata.annotations.is_none());
    }
}
