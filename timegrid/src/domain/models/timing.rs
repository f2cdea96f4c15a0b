use std::collections::BTreeMap;

use serde::Serialize;

/// One aggregate cell: total hours for a (subject, day) pair plus a
/// breakdown keyed by secondary reference (user name, project path, ...).
///
/// Cells are only ever accumulated into, so `hours` always equals the sum
/// of the reference values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Timing {
    pub hours: f64,
    pub references: BTreeMap<String, f64>,
}

impl Timing {
    /// Adds a contribution to the cell total and to its reference.
    pub fn add(&mut self, reference: impl Into<String>, hours: f64) {
        self.hours += hours;
        *self.references.entry(reference.into()).or_insert(0.0) += hours;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_total_and_references() {
        let mut timing = Timing::default();
        timing.add("alice", 1.5);
        timing.add("bob", 0.5);
        timing.add("alice", 1.0);

        assert_eq!(timing.hours, 3.0);
        assert_eq!(timing.references["alice"], 2.5);
        assert_eq!(timing.references["bob"], 0.5);
    }

    #[test]
    fn total_matches_reference_sum() {
        let mut timing = Timing::default();
        for (who, hours) in [("a", 0.25), ("b", 1.0), ("a", 2.0), ("c", 0.5)] {
            timing.add(who, hours);
        }
        let reference_sum: f64 = timing.references.values().sum();
        assert_eq!(timing.hours, reference_sum);
    }
}
