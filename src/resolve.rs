//! Overlap resolver: select a left-to-right, non-overlapping subset of spans.
//!
//! This is deliberately *not* a max-score interval scheduler. Overlapping
//! spans with different extents are resolved by position priority (earlier
//! start wins, then wider span); score only ever breaks ties between spans
//! covering **exactly** the same `[start, end)` range. That keeps resolution
//! stable under the combiner's subsumed-neighbor duplicates while preserving
//! leftmost-first scheduling semantics.

use crate::entity::Entity;

/// Remove overlapping spans, keeping the leftmost-first non-overlapping
/// selection, with exact-span ties broken by highest score.
///
/// The result is ordered by increasing `start` and contains no two
/// overlapping spans. `O(n log n)` for the sort plus a linear sweep.
///
/// # Example
///
/// ```rust
/// use medner::{resolve, Entity, EntityGroup};
///
/// let a = Entity::new("chest pain", EntityGroup::CombinedBioSymptom, 12, 22, 0.925)?;
/// let b = Entity::new("chest", EntityGroup::BiologicalStructure, 12, 17, 0.95)?;
///
/// // the wider span sorts first on equal start and wins by position
/// let kept = resolve(vec![b, a.clone()]);
/// assert_eq!(kept, vec![a]);
/// # Ok::<(), medner::Error>(())
/// ```
#[must_use]
pub fn resolve(mut entities: Vec<Entity>) -> Vec<Entity> {
    // Ties on start break by descending end, then descending score, so among
    // exactly co-located candidates the best one sorts first and identical
    // spans form a contiguous run.
    entities.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.end.cmp(&a.end))
            .then_with(|| b.score.total_cmp(&a.score))
    });

    let mut accepted: Vec<Entity> = Vec::with_capacity(entities.len());
    // Offsets are unsigned, so 0 admits the first candidate unconditionally.
    let mut last_end = 0usize;

    let mut i = 0;
    while i < entities.len() {
        let current = &entities[i];

        if current.start >= last_end {
            last_end = current.end;
            accepted.push(current.clone());
            i += 1;
            continue;
        }

        // Overlaps the most recently accepted span, which started no later
        // and was taken first: position priority says the current span loses.
        // Its exact-span duplicates lose with it, so the whole run is skipped
        // in one step.
        let (start, end) = (current.start, current.end);
        let mut j = i + 1;
        while j < entities.len() && entities[j].start == start && entities[j].end == end {
            j += 1;
        }
        log::trace!(
            "dropped {} span(s) at [{start}, {end}) overlapping accepted span ending at {last_end}",
            j - i
        );
        i = j;
    }

    accepted
}
