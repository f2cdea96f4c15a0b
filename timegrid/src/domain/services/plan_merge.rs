use crate::domain::models::TimePlan;

/// Overlays a single in-flight edit onto the persisted plan list.
///
/// An edit whose id matches a persisted plan replaces it in place; anything
/// else (the unsaved-id sentinel included) is appended as a new plan. The
/// overlay calculator can then reflect the edit before the round trip that
/// confirms it.
pub fn merge_pending(mut persisted: Vec<TimePlan>, pending: Option<TimePlan>) -> Vec<TimePlan> {
    let Some(pending) = pending else {
        return persisted;
    };

    if pending.is_persisted() {
        if let Some(slot) = persisted.iter_mut().find(|plan| plan.id == pending.id) {
            *slot = pending;
            return persisted;
        }
    }

    persisted.push(pending);
    persisted
}
