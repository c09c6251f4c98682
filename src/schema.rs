//! Wire shapes at the pipeline boundary.
//!
//! [`RawEntity`] is one row of recognizer output, exactly as the
//! token-classification service emits it. [`Annotation`] is the pipeline
//! result handed to downstream consumers (e.g. standardization search).
//! Validation happens in one place, [`RawEntity::into_entity`], so the core
//! stages only ever see well-formed [`Entity`] values.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityGroup};
use crate::error::{Error, Result};
use crate::offset;

/// One recognized span, as produced by the external recognizer.
///
/// Nothing about a `RawEntity` is trusted: the span may be inverted, the
/// score out of range, or the surface form stale relative to the source
/// text. [`RawEntity::into_entity`] checks all of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntity {
    /// Recognizer's raw category label (e.g. `"SIGN_SYMPTOM"`).
    pub entity_group: String,
    /// Surface form; must equal the source text over `[start, end)`.
    pub word: String,
    /// Start character offset.
    pub start: usize,
    /// End character offset (exclusive).
    pub end: usize,
    /// Confidence score in `[0.0, 1.0]`.
    pub score: f64,
}

impl RawEntity {
    /// Validate this row against `source` and convert it to an [`Entity`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSpan`] when `start >= end`
    /// - [`Error::InvalidScore`] when the score is non-finite or outside `[0, 1]`
    /// - [`Error::SpanOutOfBounds`] when the span reaches past the source text
    /// - [`Error::SurfaceMismatch`] when `word != source[start..end]`
    pub fn into_entity(self, source: &str) -> Result<Entity> {
        let entity = Entity::new(
            self.word,
            EntityGroup::from_label(&self.entity_group),
            self.start,
            self.end,
            self.score,
        )?;
        let expected =
            offset::char_slice(source, entity.start, entity.end).ok_or(Error::SpanOutOfBounds {
                start: entity.start,
                end: entity.end,
                len: offset::char_len(source),
            })?;
        if entity.text != expected {
            return Err(Error::SurfaceMismatch {
                found: entity.text,
                expected: expected.to_string(),
                start: entity.start,
                end: entity.end,
            });
        }
        Ok(entity)
    }
}

/// Final annotated result: the source text plus the cleaned entity set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Echo of the source text.
    pub text: String,
    /// Combined, deduplicated, filtered entities in increasing span order.
    pub entities: Vec<Entity>,
}

impl Annotation {
    /// Surface forms of the annotated entities, in order.
    ///
    /// This is the shape downstream term standardization consumes: one lookup
    /// key per entity.
    #[must_use]
    pub fn terms(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.text.as_str()).collect()
    }
}
