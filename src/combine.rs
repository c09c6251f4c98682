//! Span combiner: merge symptom/disease spans with an adjacent anatomical
//! structure span.
//!
//! "Adjacent" means **list-adjacent**, not text-adjacent: the combiner looks
//! at the neighboring entries of the input sequence, on the assumption that
//! recognizer output order approximates text order. Callers that cannot rely
//! on that ordering must pre-sort by `start` before combining; nothing here
//! verifies textual proximity.
//!
//! The pass emits exactly one entity per input index. When a merge fires,
//! the merged entity replaces the *current* entry only; the consumed
//! neighbor still produces its own (now subsumed) output entry, which the
//! overlap resolver removes downstream. Combination therefore has to run
//! before overlap resolution.

use crate::entity::{Entity, EntityGroup};
use crate::error::Result;

/// Merge each symptom/disease entity with a list-adjacent
/// `BIOLOGICAL_STRUCTURE` entity, preceding neighbor first.
///
/// With `enabled == false` this is the identity transform.
///
/// # Errors
///
/// Fails only when a merged span does not fit inside `source`, which cannot
/// happen for entities validated against the same source text.
///
/// # Example
///
/// ```rust
/// use medner::{combine, Entity, EntityGroup};
///
/// let text = "Patient has chest pain";
/// let entities = vec![
///     Entity::new("chest", EntityGroup::BiologicalStructure, 12, 17, 0.95)?,
///     Entity::new("pain", EntityGroup::SignSymptom, 18, 22, 0.9)?,
/// ];
///
/// let combined = combine(entities, text, true)?;
/// assert_eq!(combined[1].group, EntityGroup::CombinedBioSymptom);
/// assert_eq!(combined[1].text, "chest pain");
/// # Ok::<(), medner::Error>(())
/// ```
pub fn combine(entities: Vec<Entity>, source: &str, enabled: bool) -> Result<Vec<Entity>> {
    if !enabled {
        return Ok(entities);
    }

    let mut combined = Vec::with_capacity(entities.len());
    let mut merges = 0usize;

    for (i, entity) in entities.iter().enumerate() {
        if matches!(
            entity.group,
            EntityGroup::SignSymptom | EntityGroup::DiseaseDisorder
        ) {
            // Preceding neighbor takes precedence over the following one.
            if i > 0 && entities[i - 1].group == EntityGroup::BiologicalStructure {
                combined.push(Entity::combined(
                    entities[i - 1].clone(),
                    entity.clone(),
                    source,
                )?);
                merges += 1;
                continue;
            }
            if i + 1 < entities.len() && entities[i + 1].group == EntityGroup::BiologicalStructure {
                combined.push(Entity::combined(
                    entity.clone(),
                    entities[i + 1].clone(),
                    source,
                )?);
                merges += 1;
                continue;
            }
        }
        combined.push(entity.clone());
    }

    if merges > 0 {
        log::debug!("combined {merges} bio-structure span(s)");
    }
    Ok(combined)
}
