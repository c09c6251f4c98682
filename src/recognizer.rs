//! Recognizer seam.
//!
//! The named-entity recognition model is an external collaborator with a
//! narrow contract: given text, return raw spans. Modeling it as a trait
//! object injected into [`Annotator`](crate::Annotator) keeps the pipeline
//! free of process-wide service singletons and lets tests substitute a
//! canned recognizer.

use crate::error::Result;
use crate::schema::RawEntity;

/// Capability: given text, return recognized entity spans.
///
/// Implementations wrap whatever inference transport the deployment uses
/// (HTTP service, in-process model, ...). Output rows are untrusted; the
/// pipeline validates them against the source text.
pub trait Recognizer: Send + Sync {
    /// Recognize entity spans in `text`.
    ///
    /// An empty result is valid and means "no entities found".
    fn recognize(&self, text: &str) -> Result<Vec<RawEntity>>;

    /// Name of the recognizer, for logging.
    fn name(&self) -> &'static str {
        "unknown"
    }
}

/// A recognizer returning canned spans, for tests.
///
/// # Example
///
/// ```rust
/// use medner::{MockRecognizer, RawEntity, Recognizer};
///
/// let mock = MockRecognizer::new("test-mock").with_entities(vec![RawEntity {
///     entity_group: "DISEASE_DISORDER".into(),
///     word: "pneumonia".into(),
///     start: 27,
///     end: 36,
///     score: 0.97,
/// }]);
///
/// let spans = mock.recognize("Patient has chest pain and pneumonia").unwrap();
/// assert_eq!(spans.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockRecognizer {
    name: &'static str,
    entities: Vec<RawEntity>,
}

impl MockRecognizer {
    /// Create a new mock recognizer.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entities: Vec::new(),
        }
    }

    /// Set the spans to return on recognition.
    #[must_use]
    pub fn with_entities(mut self, entities: Vec<RawEntity>) -> Self {
        self.entities = entities;
        self
    }
}

impl Recognizer for MockRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<RawEntity>> {
        Ok(self.entities.clone())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
