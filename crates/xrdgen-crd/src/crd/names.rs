//! Claim name validation
//!
//! The API server rejects a claim CRD whose names overlap with the names of
//! the composite resource CRD, so overlaps are caught before generation.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinitionNames;
use xrdgen_core::CompositeResourceDefinition;

use crate::error::{CrdError, Result};

/// Validate the claim names of a definition against its composite names
///
/// A definition without claim names is valid. Claim names must be complete,
/// and none of them may equal any of the composite's kind, listKind, singular
/// or plural. Only the first conflict is reported, checking the claim's kind,
/// listKind, singular and plural in that order.
pub fn validate_claim_names(d: &CompositeResourceDefinition) -> Result<()> {
    let Some(claim) = d.claim_names() else {
        return Ok(());
    };

    let claim = identity(claim);
    if claim.iter().any(|name| name.is_empty()) {
        return Err(CrdError::MissingClaimNames);
    }

    let composite = identity(d.composite_names());
    for name in claim {
        if composite.contains(&name) {
            tracing::warn!(
                "Claim name {} of {} conflicts with its composite names",
                name,
                d.metadata.name.as_deref().unwrap_or_default()
            );
            return Err(CrdError::ConflictingClaimName {
                name: name.to_string(),
            });
        }
    }

    Ok(())
}

/// Kind, listKind, singular and plural, in that order
fn identity(names: &CustomResourceDefinitionNames) -> [&str; 4] {
    [
        names.kind.as_str(),
        names.list_kind.as_deref().unwrap_or_default(),
        names.singular.as_deref().unwrap_or_default(),
        names.plural.as_str(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrdgen_core::{CompositeResourceDefinitionSpec, CrdSpecTemplate};

    fn names(kind: &str, list_kind: &str, singular: &str, plural: &str) -> CustomResourceDefinitionNames {
        CustomResourceDefinitionNames {
            kind: kind.to_string(),
            list_kind: Some(list_kind.to_string()),
            singular: Some(singular.to_string()),
            plural: plural.to_string(),
            ..Default::default()
        }
    }

    fn definition(
        composite: CustomResourceDefinitionNames,
        claim: Option<CustomResourceDefinitionNames>,
    ) -> CompositeResourceDefinition {
        CompositeResourceDefinition::new(
            "test",
            CompositeResourceDefinitionSpec {
                claim_names: claim,
                crd_spec_template: CrdSpecTemplate {
                    names: composite,
                    ..Default::default()
                },
            },
        )
    }

    fn conflict(name: &str) -> Result<()> {
        Err(CrdError::ConflictingClaimName {
            name: name.to_string(),
        })
    }

    #[test]
    fn test_no_claim_is_valid() {
        let d = definition(names("b", "b", "b", "b"), None);
        assert_eq!(validate_claim_names(&d), Ok(()));
    }

    #[test]
    fn test_distinct_names_are_valid() {
        let d = definition(
            names("CoolComposite", "CoolCompositeList", "coolcomposite", "coolcomposites"),
            Some(names("CoolClaim", "CoolClaimList", "coolclaim", "coolclaims")),
        );
        assert_eq!(validate_claim_names(&d), Ok(()));
    }

    #[test]
    fn test_incomplete_claim_names() {
        let claim = CustomResourceDefinitionNames {
            kind: "CoolClaim".to_string(),
            plural: "coolclaims".to_string(),
            ..Default::default()
        };
        let d = definition(names("b", "b", "b", "b"), Some(claim));
        assert_eq!(validate_claim_names(&d), Err(CrdError::MissingClaimNames));

        let d = definition(names("b", "b", "b", "b"), Some(names("a", "a", "", "a")));
        assert_eq!(validate_claim_names(&d), Err(CrdError::MissingClaimNames));
    }

    #[test]
    fn test_kind_conflict() {
        let d = definition(names("a", "b", "b", "b"), Some(names("a", "a", "a", "a")));
        assert_eq!(validate_claim_names(&d), conflict("a"));
    }

    #[test]
    fn test_list_kind_conflict() {
        let d = definition(names("b", "a", "b", "b"), Some(names("a", "a", "a", "a")));
        assert_eq!(validate_claim_names(&d), conflict("a"));
    }

    #[test]
    fn test_singular_conflict() {
        let d = definition(names("b", "b", "a", "b"), Some(names("a", "a", "a", "a")));
        assert_eq!(validate_claim_names(&d), conflict("a"));
    }

    #[test]
    fn test_plural_conflict() {
        let d = definition(names("b", "b", "b", "a"), Some(names("a", "a", "a", "a")));
        assert_eq!(validate_claim_names(&d), conflict("a"));
    }

    #[test]
    fn test_conflicts_across_fields() {
        let composite = ["Kind", "KindList", "single", "plural"];
        for target in composite {
            for field in 0..4 {
                let mut claim = ["CKind", "CKindList", "csingle", "cplural"];
                claim[field] = target;
                let d = definition(
                    names(composite[0], composite[1], composite[2], composite[3]),
                    Some(names(claim[0], claim[1], claim[2], claim[3])),
                );
                assert_eq!(validate_claim_names(&d), conflict(target));
            }
        }
    }

    #[test]
    fn test_first_conflict_wins() {
        let d = definition(
            names("Kind", "KindList", "single", "plural"),
            Some(names("CKind", "KindList", "single", "cplural")),
        );
        assert_eq!(validate_claim_names(&d), conflict("KindList"));
    }
}
