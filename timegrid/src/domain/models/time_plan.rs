use serde::{Deserialize, Serialize};

use super::{DayKey, PlanId, TargetKind, TeamId};
use crate::domain::TimingError;

/// A recurring hours budget.
///
/// Starting at `cycle_start`, a fresh cycle of `cycle_days` days begins
/// every `cycle_days` days until `cycle_end` is reached or passed. Only the
/// persistence layer mutates plans; the core reads a snapshot per pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePlan {
    pub id: PlanId,
    pub team_id: TeamId,
    pub name: String,
    pub target_kind: TargetKind,
    pub target_id: String,
    pub cycle_start: DayKey,
    pub cycle_end: DayKey,
    pub cycle_days: u32,
    pub hours: f64,
}

impl TimePlan {
    /// `hours <= 0` is the persistence layer's delete marker, never a live
    /// budget.
    pub fn is_tombstone(&self) -> bool {
        self.hours <= 0.0
    }

    pub fn is_persisted(&self) -> bool {
        !self.id.is_unsaved()
    }

    /// Checks the invariants a stored plan must satisfy.
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.cycle_end < self.cycle_start {
            return Err(TimingError::InvalidPlan("cycle ends before it starts"));
        }
        if self.cycle_days == 0 {
            return Err(TimingError::InvalidPlan(
                "cycle length must be at least one day",
            ));
        }
        if self.hours <= 0.0 {
            return Err(TimingError::InvalidPlan("planned hours must be positive"));
        }
        Ok(())
    }

    /// Whether any cycle of this plan could intersect the given day span.
    pub fn intersects(&self, first: DayKey, last: DayKey) -> bool {
        self.cycle_end >= first && self.cycle_start <= last
    }
}

/// One concrete occurrence of a plan's repeating cycle.
///
/// `start_day` is the cycle's true start, which may lie before the visible
/// range; `end_day` is clipped to the earlier of the plan's own end and the
/// range's last day. `used_hours` covers the full `start_day..=end_day`
/// span and may legitimately be zero or exceed the planned hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleWindow {
    pub plan: TimePlan,
    pub start_day: DayKey,
    pub end_day: DayKey,
    pub used_hours: f64,
}

impl CycleWindow {
    /// Fraction of the planned budget consumed, clamped to `[0, 1]`.
    pub fn utilization(&self) -> f64 {
        (self.used_hours / self.plan.hours).clamp(0.0, 1.0)
    }

    /// Fraction spent past the budget, clamped to `[0, 1]`.
    pub fn overrun(&self) -> f64 {
        (self.used_hours / self.plan.hours - 1.0).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(hours: f64) -> TimePlan {
        TimePlan {
            id: PlanId::new(5),
            team_id: TeamId::from("9001"),
            name: "Support rotation".to_string(),
            target_kind: TargetKind::User,
            target_id: "81".to_string(),
            cycle_start: "2024-03-01".parse().expect("valid date"),
            cycle_end: "2024-03-22".parse().expect("valid date"),
            cycle_days: 7,
            hours,
        }
    }

    #[test]
    fn validates_stored_plan_invariants() {
        assert!(plan(40.0).validate().is_ok());

        let mut reversed = plan(40.0);
        reversed.cycle_end = "2024-02-01".parse().expect("valid date");
        assert!(reversed.validate().is_err());

        let mut degenerate = plan(40.0);
        degenerate.cycle_days = 0;
        assert!(degenerate.validate().is_err());

        assert!(plan(0.0).validate().is_err());
    }

    #[test]
    fn non_positive_hours_marks_a_tombstone() {
        assert!(plan(0.0).is_tombstone());
        assert!(plan(-1.0).is_tombstone());
        assert!(!plan(40.0).is_tombstone());
    }

    #[test]
    fn intersection_uses_inclusive_bounds() {
        let plan = plan(40.0);
        let first: DayKey = "2024-03-22".parse().expect("valid date");
        let last: DayKey = "2024-04-21".parse().expect("valid date");
        // cycle_end lands exactly on the range's first day.
        assert!(plan.intersects(first, last));

        let later_first: DayKey = "2024-03-23".parse().expect("valid date");
        assert!(!plan.intersects(later_first, last));
    }

    #[test]
    fn utilization_and_overrun_are_clamped() {
        let window = CycleWindow {
            plan: plan(40.0),
            start_day: "2024-03-01".parse().expect("valid date"),
            end_day: "2024-03-08".parse().expect("valid date"),
            used_hours: 50.0,
        };
        assert_eq!(window.utilization(), 1.0);
        assert_eq!(window.overrun(), 0.25);

        let idle = CycleWindow {
            used_hours: 0.0,
            ..window
        };
        assert_eq!(idle.utilization(), 0.0);
        assert_eq!(idle.overrun(), 0.0);
    }
}
