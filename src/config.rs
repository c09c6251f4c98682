//! Pipeline configuration.
//!
//! All caller options are enumerated up front with defaults, parsed once at
//! the pipeline boundary. Unknown flags in the wire form are ignored, never
//! an error.

use serde::{Deserialize, Serialize};

/// Term-category selection flags (caller option `termTypes`).
///
/// Every flag defaults to `false`; with no flags set the type filter passes
/// nothing through.
///
/// # Example
///
/// ```rust
/// use medner::TermTypes;
///
/// // unknown flags are ignored
/// let wanted: TermTypes =
///     serde_json::from_str(r#"{"symptom": true, "futureFlag": true}"#).unwrap();
/// assert!(wanted.symptom);
/// assert!(!wanted.disease);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TermTypes {
    /// Pass every resolved entity through the filter regardless of group.
    pub all_medical_terms: bool,
    /// Include `SIGN_SYMPTOM` and `COMBINED_BIO_SYMPTOM` entities.
    pub symptom: bool,
    /// Include `DISEASE_DISORDER` entities.
    pub disease: bool,
    /// Include `THERAPEUTIC_PROCEDURE` entities.
    pub therapeutic_procedure: bool,
}

impl TermTypes {
    /// Flags selecting every medical term.
    #[must_use]
    pub fn all() -> Self {
        Self {
            all_medical_terms: true,
            ..Self::default()
        }
    }

    /// True when no flag is set (the filter would pass nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Full pipeline configuration, validated once at the boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Merge symptom/disease entities with a list-adjacent anatomical
    /// structure entity (caller option `combineBioStructure`).
    pub combine_bio_structure: bool,
    /// Term-category selection flags applied after overlap resolution.
    pub term_types: TermTypes,
}

impl PipelineConfig {
    /// Configuration with combination enabled and the given term flags.
    #[must_use]
    pub fn combining(term_types: TermTypes) -> Self {
        Self {
            combine_bio_structure: true,
            term_types,
        }
    }
}
