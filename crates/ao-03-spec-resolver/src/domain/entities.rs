//! # Domain Entities

use ao_01_metadata_address::MetadataAddress;
use shared_types::RecordSpecification;

/// Registry entry mapping a classifier to its scope specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetDefinition {
    /// Lowercase classifier.
    pub classifier: String,
    /// Scope specification governing assets of this type.
    pub scope_spec_address: MetadataAddress,
}

/// Result of resolving a classifier.
///
/// All fields are `None` when no classifier was given; the scope graph
/// builder then falls back to the process-wide default ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedSpecification {
    /// Scope specification address.
    pub scope_spec_address: Option<MetadataAddress>,
    /// Contract specification address.
    pub contract_spec_address: Option<MetadataAddress>,
    /// First record specification of the contract specification.
    pub record_specification: Option<RecordSpecification>,
}

impl ResolvedSpecification {
    /// Whether nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.scope_spec_address.is_none()
            && self.contract_spec_address.is_none()
            && self.record_specification.is_none()
    }
}

/// Lowercase and trim a classifier; blank input yields `None`.
pub fn normalize_classifier(classifier: &str) -> Option<String> {
    let normalized = classifier.trim().to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}
