//! Type filter: select resolved entities matching the caller's term flags.

use crate::config::TermTypes;
use crate::entity::{Entity, EntityGroup};

/// Keep the entities whose group matches the requested term categories.
///
/// Order-preserving and idempotent. Inclusion is a single decision per
/// entity, so an entity matching several flags still appears once. Groups
/// outside the four medical categories (e.g. a standalone
/// `BIOLOGICAL_STRUCTURE` that was never combined) are only ever included
/// via `allMedicalTerms`.
#[must_use]
pub fn filter(entities: Vec<Entity>, wanted: &TermTypes) -> Vec<Entity> {
    entities
        .into_iter()
        .filter(|e| is_wanted(&e.group, wanted))
        .collect()
}

fn is_wanted(group: &EntityGroup, wanted: &TermTypes) -> bool {
    if wanted.all_medical_terms {
        return true;
    }
    match group {
        EntityGroup::SignSymptom | EntityGroup::CombinedBioSymptom => wanted.symptom,
        EntityGroup::DiseaseDisorder => wanted.disease,
        EntityGroup::TherapeuticProcedure => wanted.therapeutic_procedure,
        _ => false,
    }
}
