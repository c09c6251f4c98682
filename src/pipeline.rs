//! Pipeline orchestrator: combine → resolve → filter, in fixed order.
//!
//! Combination runs before overlap resolution because a merged entity's span
//! subsumes its two source spans and must compete for selection as a single
//! candidate. Filtering runs last so type selection only ever sees the
//! final, non-overlapping set. The pipeline holds no mutable state and does
//! no I/O; concurrent invocations over independent requests need no
//! coordination.

use crate::combine::combine;
use crate::config::PipelineConfig;
use crate::entity::Entity;
use crate::error::Result;
use crate::filter::filter;
use crate::recognizer::Recognizer;
use crate::resolve::resolve;
use crate::schema::{Annotation, RawEntity};

/// The entity post-processing pipeline.
///
/// A `Pipeline` is a pure function of its input: raw recognizer spans go in,
/// a cleaned, deduplicated, filtered [`Annotation`] comes out.
///
/// # Example
///
/// ```rust
/// use medner::{Pipeline, PipelineConfig, RawEntity, TermTypes};
///
/// let pipeline = Pipeline::new(PipelineConfig::combining(TermTypes {
///     disease: true,
///     ..TermTypes::default()
/// }));
///
/// let raw = vec![RawEntity {
///     entity_group: "DISEASE_DISORDER".into(),
///     word: "pneumonia".into(),
///     start: 27,
///     end: 36,
///     score: 0.97,
/// }];
///
/// let annotation = pipeline.process("Patient has chest pain and pneumonia", raw)?;
/// assert_eq!(annotation.terms(), vec!["pneumonia"]);
/// # Ok::<(), medner::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The pipeline's configuration.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline over one recognizer result.
    ///
    /// Empty recognizer output is not an error: the annotation echoes the
    /// text with an empty entity list.
    ///
    /// # Errors
    ///
    /// Fails when any raw span is malformed relative to `source_text`
    /// (inverted span, score out of range, span out of bounds, or surface
    /// form mismatch). Validation failures identify the offending entity and
    /// are never silently coerced.
    pub fn process(&self, source_text: &str, raw_entities: Vec<RawEntity>) -> Result<Annotation> {
        let entities = raw_entities
            .into_iter()
            .map(|raw| raw.into_entity(source_text))
            .collect::<Result<Vec<Entity>>>()?;
        log::debug!("validated {} recognizer span(s)", entities.len());

        let combined = combine(entities, source_text, self.config.combine_bio_structure)?;
        let resolved = resolve(combined);
        let filtered = filter(resolved, &self.config.term_types);
        log::debug!("annotation carries {} entity(ies)", filtered.len());

        Ok(Annotation {
            text: source_text.to_string(),
            entities: filtered,
        })
    }
}

/// A [`Pipeline`] paired with an injected [`Recognizer`].
///
/// This is the end-to-end entry point: text in, annotation out. The
/// recognizer is a narrow external capability, never ambient global state.
pub struct Annotator {
    recognizer: Box<dyn Recognizer>,
    pipeline: Pipeline,
}

impl Annotator {
    /// Create an annotator from a recognizer and a pipeline configuration.
    #[must_use]
    pub fn new(recognizer: Box<dyn Recognizer>, config: PipelineConfig) -> Self {
        Self {
            recognizer,
            pipeline: Pipeline::new(config),
        }
    }

    /// Recognize and post-process `text` in one call.
    ///
    /// # Errors
    ///
    /// Propagates recognizer failures and raw-span validation failures.
    pub fn annotate(&self, text: &str) -> Result<Annotation> {
        let raw = self.recognizer.recognize(text)?;
        log::debug!(
            "recognizer '{}' returned {} span(s)",
            self.recognizer.name(),
            raw.len()
        );
        self.pipeline.process(text, raw)
    }

    /// The underlying pipeline.
    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}
