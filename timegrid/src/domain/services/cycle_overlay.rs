use std::collections::BTreeMap;

use crate::domain::models::{CycleWindow, DayKey, PlanTarget, TimePlan};

use super::DayRange;

/// Computes the concrete budget windows to overlay on one subject row.
///
/// Walks each matching plan's repeating cycle and clips it to the visible
/// range. The enumeration bound is the earlier of the plan's own end and
/// the range's last day, so a plan with a far-future `cycle_end` can never
/// iterate past the window. Windows are keyed by their placement day: the
/// cycle's start when it is visible, otherwise the range's first day. Two
/// plans colliding on a placement day resolve last-write-wins.
pub fn cycle_windows<T: PlanTarget>(
    subject: &T,
    plans: &[TimePlan],
    range: &DayRange,
) -> BTreeMap<DayKey, CycleWindow> {
    let mut windows = BTreeMap::new();

    for plan in plans {
        if plan.target_kind != subject.target_kind() || subject.target_id() != plan.target_id.as_str()
        {
            continue;
        }
        if plan.cycle_days == 0 {
            // A zero-length cycle would never advance.
            tracing::warn!(plan_id = %plan.id, plan = %plan.name, "skipping plan with zero cycle length");
            continue;
        }

        let bound = plan.cycle_end.min(range.last());
        let step = u64::from(plan.cycle_days);

        let mut cycle_start = plan.cycle_start;
        while cycle_start <= bound {
            let end_day = cycle_start.plus_days(step).min(bound);
            if end_day >= range.first() {
                // A cycle that began before the window is anchored at the
                // window's left edge; its hours still cover the full span.
                let key = if range.contains(cycle_start) {
                    cycle_start
                } else {
                    range.first()
                };
                windows.insert(
                    key,
                    CycleWindow {
                        plan: plan.clone(),
                        start_day: cycle_start,
                        end_day,
                        used_hours: used_hours(subject, cycle_start, end_day),
                    },
                );
            }
            cycle_start = cycle_start.plus_days(step);
        }
    }

    windows
}

/// Sums the subject's day totals over `from..=to`.
///
/// Days before the visible range resolve against the same entries map, so
/// the totals are only correct when aggregation ran over the widened
/// overfetch window.
fn used_hours<T: PlanTarget>(subject: &T, from: DayKey, to: DayKey) -> f64 {
    subject
        .entries()
        .range(from..=to)
        .map(|(_, timing)| timing.hours)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RangeSettings;
    use crate::domain::models::{DayEntries, PlanId, TargetKind, TeamId, Timing, UserActivity, UserId};
    use chrono::TimeZone;

    fn range_ending(year: i32, month: u32, day: u32) -> DayRange {
        let end = chrono::Utc
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid test instant");
        DayRange::ending_at(end, &RangeSettings::default())
    }

    fn subject_with_hours(per_day: &[(&str, f64)]) -> UserActivity {
        let mut entries = DayEntries::new();
        for (day, hours) in per_day {
            let mut timing = Timing::default();
            timing.add("S > L", *hours);
            entries.insert(day.parse().expect("valid date"), timing);
        }
        UserActivity {
            id: UserId::new(81),
            name: "alice".to_string(),
            entries,
        }
    }

    fn user_plan(id: i64, start: &str, end: &str, cycle_days: u32, hours: f64) -> TimePlan {
        TimePlan {
            id: PlanId::new(id),
            team_id: TeamId::from("9001"),
            name: format!("plan-{id}"),
            target_kind: TargetKind::User,
            target_id: "81".to_string(),
            cycle_start: start.parse().expect("valid date"),
            cycle_end: end.parse().expect("valid date"),
            cycle_days,
            hours,
        }
    }

    #[test]
    fn weekly_cycle_sums_used_hours_over_its_span() {
        // Visible range ends 2024-03-31, so 2024-03-01..22 is fully inside.
        let range = range_ending(2024, 3, 31);
        let subject = subject_with_hours(&[
            ("2024-03-01", 5.0),
            ("2024-03-02", 5.0),
            ("2024-03-03", 5.0),
            ("2024-03-04", 5.0),
            ("2024-03-05", 5.0),
            ("2024-03-06", 5.0),
            ("2024-03-07", 5.0),
        ]);
        let plans = vec![user_plan(5, "2024-03-01", "2024-03-22", 7, 40.0)];

        let windows = cycle_windows(&subject, &plans, &range);

        let first_key: DayKey = "2024-03-01".parse().expect("valid date");
        let window = &windows[&first_key];
        assert_eq!(window.start_day.to_string(), "2024-03-01");
        assert_eq!(window.end_day.to_string(), "2024-03-08");
        assert_eq!(window.used_hours, 35.0);
        assert!(window.used_hours <= window.plan.hours);

        // Cycle starts repeat every seven days up to the plan's end.
        let keys: Vec<String> = windows.keys().map(DayKey::to_string).collect();
        assert_eq!(
            keys,
            vec!["2024-03-01", "2024-03-08", "2024-03-15", "2024-03-22"]
        );
    }

    #[test]
    fn cycle_starting_before_the_range_is_anchored_at_its_left_edge() {
        let range = range_ending(2024, 3, 31);
        let range_first = range.first(); // 2024-03-01 with the default lookback

        // Starts 10 days before the first visible day; with 7-day cycles the
        // second occurrence (range_first - 3) overlaps the window.
        let start = range_first.minus_days(10);
        let plan_end = range_first.plus_days(20);
        let plans = vec![TimePlan {
            cycle_start: start,
            cycle_end: plan_end,
            ..user_plan(5, "2024-03-01", "2024-03-22", 7, 40.0)
        }];

        // 2h on the two overfetched days before the range, 3h on the first
        // visible day.
        let overlap_start = range_first.minus_days(3);
        let day_before = overlap_start.to_string();
        let day_after = overlap_start.succ().to_string();
        let first_day = range_first.to_string();
        let subject = subject_with_hours(&[
            (day_before.as_str(), 2.0),
            (day_after.as_str(), 2.0),
            (first_day.as_str(), 3.0),
        ]);

        let windows = cycle_windows(&subject, &plans, &range);
        let window = windows.get(&range_first).expect("window anchored at range start");

        assert_eq!(window.start_day, overlap_start);
        assert_eq!(window.end_day, overlap_start.plus_days(7));
        assert_eq!(window.used_hours, 7.0);
    }

    #[test]
    fn far_future_cycle_end_is_clamped_to_the_visible_range() {
        let range = range_ending(2024, 3, 31);
        // A legacy plan that never expires.
        let plans = vec![user_plan(5, "2024-03-01", "2099-01-01", 7, 40.0)];
        let subject = subject_with_hours(&[]);

        let windows = cycle_windows(&subject, &plans, &range);

        // Bounded by the range: no cycle may start after its last day.
        assert!(windows.values().all(|w| w.start_day <= range.last()));
        assert_eq!(windows.len(), 5);
        let last = windows.values().last().expect("at least one window");
        assert_eq!(last.start_day.to_string(), "2024-03-29");
        assert_eq!(last.end_day, range.last());
    }

    #[test]
    fn zero_length_cycles_are_skipped() {
        let range = range_ending(2024, 3, 31);
        let plans = vec![user_plan(5, "2024-03-01", "2024-03-22", 0, 40.0)];
        let subject = subject_with_hours(&[("2024-03-01", 5.0)]);

        assert!(cycle_windows(&subject, &plans, &range).is_empty());
    }

    #[test]
    fn plans_for_other_targets_produce_no_windows() {
        let range = range_ending(2024, 3, 31);
        let subject = subject_with_hours(&[("2024-03-01", 5.0)]);

        let mut other_user = user_plan(5, "2024-03-01", "2024-03-22", 7, 40.0);
        other_user.target_id = "999".to_string();
        let mut other_kind = user_plan(6, "2024-03-01", "2024-03-22", 7, 40.0);
        other_kind.target_kind = TargetKind::Tag;

        assert!(cycle_windows(&subject, &[other_user, other_kind], &range).is_empty());
    }

    #[test]
    fn zero_and_over_budget_usage_are_valid_states() {
        let range = range_ending(2024, 3, 31);
        let plans = vec![user_plan(5, "2024-03-10", "2024-03-16", 7, 4.0)];
        let subject = subject_with_hours(&[("2024-03-10", 10.0)]);

        let windows = cycle_windows(&subject, &plans, &range);
        let key: DayKey = "2024-03-10".parse().expect("valid date");
        let window = &windows[&key];

        assert_eq!(window.used_hours, 10.0);
        assert!(window.used_hours > window.plan.hours);
        assert_eq!(window.utilization(), 1.0);

        let idle_plans = vec![user_plan(6, "2024-03-20", "2024-03-26", 7, 4.0)];
        let idle_windows = cycle_windows(&subject, &idle_plans, &range);
        let idle_key: DayKey = "2024-03-20".parse().expect("valid date");
        assert_eq!(idle_windows[&idle_key].used_hours, 0.0);
    }

    #[test]
    fn colliding_placement_keys_resolve_last_write_wins() {
        let range = range_ending(2024, 3, 31);
        let subject = subject_with_hours(&[]);
        let plans = vec![
            user_plan(5, "2024-03-10", "2024-03-16", 7, 4.0),
            user_plan(6, "2024-03-10", "2024-03-16", 7, 8.0),
        ];

        let windows = cycle_windows(&subject, &plans, &range);
        let key: DayKey = "2024-03-10".parse().expect("valid date");

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[&key].plan.id, PlanId::new(6));
    }

    #[test]
    fn window_keys_stay_inside_the_visible_range() {
        let range = range_ending(2024, 3, 31);
        let subject = subject_with_hours(&[]);
        let plans = vec![user_plan(5, "2023-11-01", "2099-01-01", 3, 4.0)];

        let windows = cycle_windows(&subject, &plans, &range);
        assert!(!windows.is_empty());
        assert!(windows.keys().all(|key| range.contains(*key)));
    }
}
