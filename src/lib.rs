//! # medner
//!
//! Post-processing for medical NER spans.
//!
//! A token-classification model (external, treated as a black box) turns
//! clinical text into raw entity spans. Those spans are messy: a symptom and
//! the anatomical structure it belongs to arrive as separate entries, merged
//! candidates overlap their sources, and callers usually want only a subset
//! of categories. This crate is the deterministic cleanup between the model
//! and downstream term lookup:
//!
//! ```text
//! raw spans → combine → resolve overlaps → filter by type → annotation
//! ```
//!
//! - **Combine**: merge a `SIGN_SYMPTOM`/`DISEASE_DISORDER` span with a
//!   list-adjacent `BIOLOGICAL_STRUCTURE` span into one
//!   `COMBINED_BIO_SYMPTOM` entity ("chest" + "pain" → "chest pain").
//! - **Resolve**: keep a leftmost-first, non-overlapping selection; exact
//!   duplicates compete on confidence.
//! - **Filter**: select the categories the caller asked for.
//!
//! Each stage is a pure transformation. No I/O, no shared mutable state,
//! trivially safe to call concurrently across requests.
//!
//! ## Quick Start
//!
//! ```rust
//! use medner::{Pipeline, PipelineConfig, RawEntity, TermTypes};
//!
//! let pipeline = Pipeline::new(PipelineConfig::combining(TermTypes {
//!     symptom: true,
//!     disease: true,
//!     ..TermTypes::default()
//! }));
//!
//! let raw = vec![
//!     RawEntity { entity_group: "BIOLOGICAL_STRUCTURE".into(), word: "chest".into(), start: 12, end: 17, score: 0.95 },
//!     RawEntity { entity_group: "SIGN_SYMPTOM".into(), word: "pain".into(), start: 18, end: 22, score: 0.9 },
//! ];
//!
//! let annotation = pipeline.process("Patient has chest pain and pneumonia", raw)?;
//! assert_eq!(annotation.terms(), vec!["chest pain"]);
//! # Ok::<(), medner::Error>(())
//! ```
//!
//! ## Injecting a recognizer
//!
//! The recognition model is dependency-injected through the [`Recognizer`]
//! trait rather than reached through a global singleton; [`Annotator`] pairs
//! one with a pipeline for end-to-end annotation. Tests use
//! [`MockRecognizer`].
//!
//! ## Offsets
//!
//! Entity spans are half-open **character** ranges `[start, end)` into the
//! source text, matching what the recognizer emits. See [`offset`] for the
//! byte-boundary handling.

#![warn(missing_docs)]

pub mod combine;
pub mod config;
mod entity;
mod error;
pub mod filter;
pub mod offset;
mod pipeline;
mod recognizer;
pub mod resolve;
mod schema;

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use medner::prelude::*;
    //!
    //! let pipeline = Pipeline::new(PipelineConfig::combining(TermTypes::all()));
    //! let annotation = pipeline.process("text", vec![]).unwrap();
    //! assert!(annotation.entities.is_empty());
    //! ```
    pub use crate::config::{PipelineConfig, TermTypes};
    pub use crate::entity::{Entity, EntityGroup};
    pub use crate::error::{Error, Result};
    pub use crate::pipeline::{Annotator, Pipeline};
    pub use crate::recognizer::{MockRecognizer, Recognizer};
    pub use crate::schema::{Annotation, RawEntity};
}

// Re-exports
pub use combine::combine;
pub use config::{PipelineConfig, TermTypes};
pub use entity::{Entity, EntityGroup};
pub use error::{Error, Result};
pub use filter::filter;
pub use pipeline::{Annotator, Pipeline};
pub use recognizer::{MockRecognizer, Recognizer};
pub use resolve::resolve;
pub use schema::{Annotation, RawEntity};
