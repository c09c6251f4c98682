//! Entity types and structures for medical-term annotation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::offset;

/// Entity category classification.
///
/// Follows the label set of clinical token-classification models
/// (e.g. `SIGN_SYMPTOM`, `DISEASE_DISORDER`). Labels the pipeline has no
/// special handling for are carried through as [`EntityGroup::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityGroup {
    /// Sign or symptom (SIGN_SYMPTOM)
    SignSymptom,
    /// Disease or disorder (DISEASE_DISORDER)
    DiseaseDisorder,
    /// Anatomical/biological structure (BIOLOGICAL_STRUCTURE)
    BiologicalStructure,
    /// Therapeutic procedure (THERAPEUTIC_PROCEDURE)
    TherapeuticProcedure,
    /// Structure + symptom/disease composite produced by the span combiner
    /// (COMBINED_BIO_SYMPTOM). Never emitted by the recognizer itself.
    CombinedBioSymptom,
    /// Any other recognizer-defined label (MEDICATION, LAB_VALUE, ...)
    Other(String),
}

impl EntityGroup {
    /// Convert to the recognizer's raw label string.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            EntityGroup::SignSymptom => "SIGN_SYMPTOM",
            EntityGroup::DiseaseDisorder => "DISEASE_DISORDER",
            EntityGroup::BiologicalStructure => "BIOLOGICAL_STRUCTURE",
            EntityGroup::TherapeuticProcedure => "THERAPEUTIC_PROCEDURE",
            EntityGroup::CombinedBioSymptom => "COMBINED_BIO_SYMPTOM",
            EntityGroup::Other(s) => s.as_str(),
        }
    }

    /// Parse from a raw recognizer label.
    ///
    /// Unrecognized labels are preserved verbatim in [`EntityGroup::Other`]
    /// so the wire format round-trips.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "SIGN_SYMPTOM" => EntityGroup::SignSymptom,
            "DISEASE_DISORDER" => EntityGroup::DiseaseDisorder,
            "BIOLOGICAL_STRUCTURE" => EntityGroup::BiologicalStructure,
            "THERAPEUTIC_PROCEDURE" => EntityGroup::TherapeuticProcedure,
            "COMBINED_BIO_SYMPTOM" => EntityGroup::CombinedBioSymptom,
            other => EntityGroup::Other(other.to_string()),
        }
    }
}

impl From<String> for EntityGroup {
    fn from(label: String) -> Self {
        EntityGroup::from_label(&label)
    }
}

impl From<EntityGroup> for String {
    fn from(group: EntityGroup) -> Self {
        group.as_label().to_string()
    }
}

impl std::fmt::Display for EntityGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// A recognized medical-term span.
///
/// Immutable once constructed; every pipeline stage produces new entities
/// rather than mutating in place. Construction validates the span and score,
/// so holding an `Entity` is proof that `start < end` and
/// `score` is a finite value in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity category
    #[serde(rename = "entity_group")]
    pub group: EntityGroup,
    /// Surface form (the substring of the source covered by `[start, end)`)
    #[serde(rename = "word")]
    pub text: String,
    /// Start position (character offset in the source text)
    pub start: usize,
    /// End position (character offset, exclusive)
    pub end: usize,
    /// Confidence score in `[0.0, 1.0]`
    pub score: f64,
    /// The two originating entities, present only for
    /// [`EntityGroup::CombinedBioSymptom`].
    #[serde(
        rename = "original_entities",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub components: Option<Box<(Entity, Entity)>>,
}

impl Entity {
    /// Create a new entity.
    ///
    /// # Errors
    ///
    /// Rejects spans with `start >= end` and scores outside `[0.0, 1.0]`
    /// (including NaN). The surface form is *not* checked against any source
    /// text here; that happens at the pipeline boundary where the source is
    /// available (see [`RawEntity::into_entity`](crate::RawEntity::into_entity)).
    ///
    /// # Example
    ///
    /// ```rust
    /// use medner::{Entity, EntityGroup};
    ///
    /// let e = Entity::new("pneumonia", EntityGroup::DiseaseDisorder, 27, 36, 0.97)?;
    /// assert_eq!(e.len(), 9);
    ///
    /// assert!(Entity::new("", EntityGroup::DiseaseDisorder, 5, 5, 0.97).is_err());
    /// # Ok::<(), medner::Error>(())
    /// ```
    pub fn new(
        text: impl Into<String>,
        group: EntityGroup,
        start: usize,
        end: usize,
        score: f64,
    ) -> Result<Self> {
        if start >= end {
            return Err(Error::InvalidSpan { start, end });
        }
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(Error::InvalidScore { score });
        }
        Ok(Self {
            text: text.into(),
            group,
            start,
            end,
            score,
            components: None,
        })
    }

    /// Merge two entities into one [`EntityGroup::CombinedBioSymptom`] entity.
    ///
    /// The merged span is `[min(start), max(end))`, the score is the mean of
    /// the two scores, and the surface form is re-read from `source` over the
    /// merged span. Component order is preserved as given.
    ///
    /// # Errors
    ///
    /// Fails when the merged span does not fit inside `source`.
    pub fn combined(first: Entity, second: Entity, source: &str) -> Result<Self> {
        let start = first.start.min(second.start);
        let end = first.end.max(second.end);
        let score = (first.score + second.score) / 2.0;
        let text = offset::char_slice(source, start, end)
            .ok_or(Error::SpanOutOfBounds {
                start,
                end,
                len: offset::char_len(source),
            })?
            .to_string();
        Ok(Self {
            group: EntityGroup::CombinedBioSymptom,
            text,
            start,
            end,
            score,
            components: Some(Box::new((first, second))),
        })
    }

    /// Span width in characters.
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // spans are never empty: start < end
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this entity's span overlaps another's.
    #[must_use]
    pub fn overlaps(&self, other: &Entity) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}
