//! Integration tests for the six testable scenarios in spec §8 (S1-S6).
//! These exercise the full pipeline through `engine::solve`, so they
//! require the `ffi` feature (the CP-SAT backend).

#![cfg(feature = "ffi")]

use chrono::NaiveDate;

use roster_engine::config::EngineConfig;
use roster_engine::domain::{Availability, FixedMeeting, InputBundle, Person, Team};
use roster_engine::engine;
use roster_engine::invariants::check_invariants;
use roster_engine::timegrid::TimeGrid;
use roster_engine::types::AvailabilityCode;

fn mark_available(availability: &mut Availability, person: &str, dates: &[NaiveDate]) {
    for &date in dates {
        for slot in 0..26 {
            availability.set(person.into(), date, slot, AvailabilityCode::Preferred);
        }
    }
}

/// S1 - Minimal feasible: one team, base=1, one available day, a full
/// eligible commissioner pool. Expect exactly one meeting on that day.
#[test]
fn s1_minimal_feasible() {
    let mut availability = Availability::new();
    let day = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
    let deadline = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();

    let persons = vec![
        Person::new("leader", "Leader", false, false),
        Person::new("c1", "C1", true, true),
        Person::new("c2", "C2", true, true),
        Person::new("c3", "C3", true, false),
        Person::new("c4", "C4", true, false),
    ];
    for p in &persons {
        mark_available(&mut availability, &p.id, &[day]);
    }

    let bundle = InputBundle {
        persons,
        teams: vec![Team {
            id: "t1".into(),
            name: "Alpha".into(),
            leader_id: "leader".into(),
            member_ids: Default::default(),
            deadline,
            base_required: 1,
            add_required: 0,
        }],
        availability,
        fixed_meetings: vec![],
        generation_start: day.and_hms_opt(0, 0, 0).unwrap(),
    };

    let output = engine::solve(&bundle, &EngineConfig::default()).unwrap();
    assert!(output.feasible, "expected a feasible solve, got {:?}", output.status);
    assert_eq!(output.meetings.len(), 1);
    assert_eq!(output.meetings[0].date, day);

    let grid = TimeGrid::new(EngineConfig::default().time, bundle.generation_start.date());
    assert!(check_invariants(&bundle, &output, &grid).is_empty());
}

/// S2 - Forced infeasibility by commissioner shortage: only 3 commissioners
/// exist total. Never a 3-commissioner meeting; solve reports infeasible.
#[test]
fn s2_commissioner_shortage_is_infeasible() {
    let mut availability = Availability::new();
    let day = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
    let deadline = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();

    let persons = vec![
        Person::new("leader", "Leader", false, false),
        Person::new("c1", "C1", true, true),
        Person::new("c2", "C2", true, true),
        Person::new("c3", "C3", true, false),
    ];
    for p in &persons {
        mark_available(&mut availability, &p.id, &[day]);
    }

    let bundle = InputBundle {
        persons,
        teams: vec![Team {
            id: "t1".into(),
            name: "Alpha".into(),
            leader_id: "leader".into(),
            member_ids: Default::default(),
            deadline,
            base_required: 1,
            add_required: 0,
        }],
        availability,
        fixed_meetings: vec![],
        generation_start: day.and_hms_opt(0, 0, 0).unwrap(),
    };

    let output = engine::solve(&bundle, &EngineConfig::default()).unwrap();
    assert!(!output.feasible);
    assert!(output.meetings.is_empty());
    for m in &output.meetings {
        assert_ne!(m.commissioners.len(), 3);
    }
}

/// S3 - Handover at the fixed-to-new seam: the returned meeting must share
/// at least one commissioner with the fixed tail.
#[test]
fn s3_handover_at_seam() {
    let mut availability = Availability::new();
    let fixed_day = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    let new_day = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    let another_day = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
    let deadline = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();

    let persons = vec![
        Person::new("leader", "Leader", false, false),
        Person::new("a", "A", true, true),
        Person::new("b", "B", true, true),
        Person::new("c", "C", true, false),
        Person::new("d", "D", true, false),
        Person::new("e", "E", true, false),
    ];
    for p in &persons {
        mark_available(&mut availability, &p.id, &[new_day, another_day]);
    }

    let bundle = InputBundle {
        persons,
        teams: vec![Team {
            id: "t1".into(),
            name: "Alpha".into(),
            leader_id: "leader".into(),
            member_ids: Default::default(),
            deadline,
            base_required: 2,
            add_required: 0,
        }],
        availability,
        fixed_meetings: vec![FixedMeeting {
            team_id: "t1".into(),
            date: fixed_day,
            start_slot: 0,
            dt_idx: 0,
            leader_id: "leader".into(),
            commissioners: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            sequence: Some(1),
        }],
        generation_start: new_day.and_hms_opt(0, 0, 0).unwrap(),
    };

    let output = engine::solve(&bundle, &EngineConfig::default()).unwrap();
    assert!(output.feasible);
    let first = output.meetings.iter().find(|m| m.sequence == 2).expect("expected sequence 2");
    let seam = ["a", "b", "c", "d"];
    assert!(first.commissioners.iter().any(|c| seam.contains(&c.as_str())));
}

/// S4 - Deadline-day penalty: given an earlier equivalent date, the earlier
/// date is chosen over the deadline date.
#[test]
fn s4_prefers_earlier_date_over_deadline() {
    let mut availability = Availability::new();
    let earlier = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
    let deadline = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();

    let persons = vec![
        Person::new("leader", "Leader", false, false),
        Person::new("c1", "C1", true, true),
        Person::new("c2", "C2", true, true),
        Person::new("c3", "C3", true, false),
        Person::new("c4", "C4", true, false),
    ];
    for p in &persons {
        mark_available(&mut availability, &p.id, &[earlier, deadline]);
    }

    let bundle = InputBundle {
        persons,
        teams: vec![Team {
            id: "t1".into(),
            name: "Alpha".into(),
            leader_id: "leader".into(),
            member_ids: Default::default(),
            deadline,
            base_required: 1,
            add_required: 0,
        }],
        availability,
        fixed_meetings: vec![],
        generation_start: earlier.and_hms_opt(0, 0, 0).unwrap(),
    };

    let output = engine::solve(&bundle, &EngineConfig::default()).unwrap();
    assert!(output.feasible);
    assert_eq!(output.meetings[0].date, earlier);
}

/// S5 - Load balance: two teams sharing a commissioner pool; Wmax-Wmin <= 1
/// across eligible commissioners.
#[test]
fn s5_load_balance() {
    let mut availability = Availability::new();
    let days: Vec<NaiveDate> = (1..=10).map(|d| NaiveDate::from_ymd_opt(2026, 8, d).unwrap()).collect();
    let deadline = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();

    let persons = vec![
        Person::new("leader1", "Leader1", false, false),
        Person::new("leader2", "Leader2", false, false),
        Person::new("c1", "C1", true, true),
        Person::new("c2", "C2", true, true),
        Person::new("c3", "C3", true, false),
        Person::new("c4", "C4", true, false),
        Person::new("c5", "C5", true, false),
    ];
    for p in &persons {
        mark_available(&mut availability, &p.id, &days);
    }

    let bundle = InputBundle {
        persons: persons.clone(),
        teams: vec![
            Team {
                id: "t1".into(),
                name: "Alpha".into(),
                leader_id: "leader1".into(),
                member_ids: Default::default(),
                deadline,
                base_required: 2,
                add_required: 0,
            },
            Team {
                id: "t2".into(),
                name: "Beta".into(),
                leader_id: "leader2".into(),
                member_ids: Default::default(),
                deadline,
                base_required: 2,
                add_required: 0,
            },
        ],
        availability,
        fixed_meetings: vec![],
        generation_start: days[0].and_hms_opt(0, 0, 0).unwrap(),
    };

    let output = engine::solve(&bundle, &EngineConfig::default()).unwrap();
    assert!(output.feasible);

    let eligible = ["c1", "c2", "c3", "c4", "c5"];
    let mut counts = std::collections::HashMap::new();
    for person in eligible {
        counts.insert(person, 0u32);
    }
    for m in &output.meetings {
        for c in &m.commissioners {
            if let Some(count) = counts.get_mut(c.as_str()) {
                *count += 1;
            }
        }
    }
    let max = *counts.values().max().unwrap();
    let min = *counts.values().min().unwrap();
    assert!(max - min <= 1, "load imbalance: {counts:?}");
}

/// S6 - Sequencing: three feasible dates in order, base=3. Expect sequence
/// numbers 1,2,3 on the three dates in chronological order.
#[test]
fn s6_sequencing_in_chronological_order() {
    let mut availability = Availability::new();
    let d1 = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    let d2 = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    let d3 = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
    let deadline = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();

    let persons = vec![
        Person::new("leader", "Leader", false, false),
        Person::new("c1", "C1", true, true),
        Person::new("c2", "C2", true, true),
        Person::new("c3", "C3", true, false),
        Person::new("c4", "C4", true, false),
    ];
    for p in &persons {
        mark_available(&mut availability, &p.id, &[d1, d2, d3]);
    }

    let bundle = InputBundle {
        persons,
        teams: vec![Team {
            id: "t1".into(),
            name: "Alpha".into(),
            leader_id: "leader".into(),
            member_ids: Default::default(),
            deadline,
            base_required: 3,
            add_required: 0,
        }],
        availability,
        fixed_meetings: vec![],
        generation_start: d1.and_hms_opt(0, 0, 0).unwrap(),
    };

    let output = engine::solve(&bundle, &EngineConfig::default()).unwrap();
    assert!(output.feasible);

    let mut first_three: Vec<_> = output.meetings.iter().filter(|m| m.sequence <= 3).collect();
    first_three.sort_by_key(|m| m.sequence);
    assert_eq!(first_three.len(), 3);
    assert_eq!(first_three[0].date, d1);
    assert_eq!(first_three[1].date, d2);
    assert_eq!(first_three[2].date, d3);
}
