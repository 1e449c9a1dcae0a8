/*!
 * Scheduler Tests
 * End-to-end traces for every algorithm and mode
 */

use pretty_assertions::assert_eq;
use proc_sched_sim::{
    simulate, Algorithm, Event, EventKind, Mode, ProcessDescriptor, ProcessRecord, ProcessType,
    SchedulerConfig, SchedulerError, SchedulingEngine, SimulationOutcome, ValidationError,
};

fn cpu(id: &str, arrival: i64, burst: i64, priority: i64) -> ProcessDescriptor {
    ProcessDescriptor::new(id, arrival, burst, priority, ProcessType::Cpu)
}

fn finished<'a>(outcome: &'a SimulationOutcome, id: &str) -> &'a ProcessRecord {
    outcome
        .completed
        .iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| panic!("{id} did not complete"))
}

fn completion_order(outcome: &SimulationOutcome) -> Vec<&str> {
    outcome.completed.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_round_robin_trace() {
    let outcome = simulate(
        &[cpu("P1", 0, 5, 1), cpu("P2", 1, 3, 1)],
        SchedulerConfig::round_robin(2).unwrap(),
    )
    .unwrap();

    let p1 = finished(&outcome, "P1");
    let p2 = finished(&outcome, "P2");

    assert_eq!(completion_order(&outcome), vec!["P2", "P1"]);
    assert_eq!(p1.execution_history, vec![0, 1, 4, 5, 7]);
    assert_eq!(p2.execution_history, vec![2, 3, 6]);

    assert_eq!((p1.start, p1.finish), (Some(0), Some(8)));
    assert_eq!((p1.turnaround, p1.waiting, p1.response), (8, 3, Some(0)));
    assert_eq!((p2.start, p2.finish), (Some(2), Some(7)));
    assert_eq!((p2.turnaround, p2.waiting, p2.response), (6, 3, Some(1)));

    assert_eq!(p1.context_switches, 2);
    assert_eq!(p2.context_switches, 1);
    assert_eq!(outcome.metrics.context_switches, 5);
    assert_eq!(outcome.metrics.total_ticks, 8);
    assert_eq!(outcome.metrics.idle_time, 0);
    assert_eq!(outcome.metrics.cpu_utilization, 100.0);
}

#[test]
fn test_round_robin_event_log() {
    let outcome = simulate(
        &[cpu("P1", 0, 5, 1), cpu("P2", 1, 3, 1)],
        SchedulerConfig::round_robin(2).unwrap(),
    )
    .unwrap();

    use EventKind::*;
    let expected = vec![
        Event::process(0, Arrived, "P1"),
        Event::process(0, Dispatched, "P1"),
        Event::process(2, Arrived, "P2"),
        Event::process(2, QuantumExpired, "P1"),
        Event::process(2, Dispatched, "P2"),
        Event::process(4, QuantumExpired, "P2"),
        Event::process(4, Dispatched, "P1"),
        Event::process(6, QuantumExpired, "P1"),
        Event::process(6, Dispatched, "P2"),
        Event::process(7, Completed, "P2"),
        Event::process(7, Dispatched, "P1"),
        Event::process(8, Completed, "P1"),
    ];
    assert_eq!(outcome.events.as_slice(), expected.as_slice());
}

#[test]
fn test_preemptive_priority_trace() {
    let outcome = simulate(
        &[cpu("P1", 0, 4, 2), cpu("P2", 1, 3, 3)],
        SchedulerConfig::new(Algorithm::Priority, Mode::Preemptive),
    )
    .unwrap();

    let p1 = finished(&outcome, "P1");
    let p2 = finished(&outcome, "P2");

    assert_eq!(completion_order(&outcome), vec!["P2", "P1"]);
    assert_eq!(p1.execution_history, vec![0, 4, 5, 6]);
    assert_eq!(p2.execution_history, vec![1, 2, 3]);
    assert_eq!(p2.finish, Some(4));
    assert_eq!(p1.finish, Some(7));
    assert_eq!((p1.turnaround, p1.waiting, p1.response), (7, 3, Some(0)));
    assert_eq!((p2.turnaround, p2.waiting, p2.response), (3, 0, Some(0)));
    assert_eq!(p1.context_switches, 1);
    assert_eq!(outcome.metrics.context_switches, 3);

    use EventKind::*;
    let kinds: Vec<(u64, EventKind)> = outcome.events.iter().map(|e| (e.tick, e.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (0, Arrived),
            (0, Dispatched),
            (1, Arrived),
            (1, Preempted),
            (1, Dispatched),
            (4, Completed),
            (4, Dispatched),
            (7, Completed),
        ]
    );
}

#[test]
fn test_equal_priority_does_not_preempt() {
    let outcome = simulate(
        &[cpu("P1", 0, 3, 2), cpu("P2", 1, 2, 2)],
        SchedulerConfig::new(Algorithm::Priority, Mode::Preemptive),
    )
    .unwrap();

    assert_eq!(completion_order(&outcome), vec!["P1", "P2"]);
    assert_eq!(outcome.events.of_kind(EventKind::Preempted).count(), 0);
    assert_eq!(outcome.metrics.context_switches, 1);
}

#[test]
fn test_non_preemptive_priority_ignores_arrivals() {
    let outcome = simulate(
        &[cpu("P1", 0, 4, 1), cpu("P2", 1, 3, 5)],
        SchedulerConfig::new(Algorithm::Priority, Mode::NonPreemptive),
    )
    .unwrap();

    assert_eq!(completion_order(&outcome), vec!["P1", "P2"]);
    assert_eq!(finished(&outcome, "P1").execution_history, vec![0, 1, 2, 3]);
    assert_eq!(finished(&outcome, "P2").finish, Some(7));
}

#[test]
fn test_preemptive_sjf() {
    let outcome = simulate(
        &[cpu("P1", 0, 6, 1), cpu("P2", 1, 3, 1)],
        SchedulerConfig::new(Algorithm::ShortestRemaining, Mode::Preemptive),
    )
    .unwrap();

    let p1 = finished(&outcome, "P1");
    let p2 = finished(&outcome, "P2");
    assert_eq!(p2.execution_history, vec![1, 2, 3]);
    assert_eq!(p1.finish, Some(9));
    assert_eq!(p1.waiting, 3);
    assert_eq!(outcome.metrics.context_switches, 3);
}

#[test]
fn test_non_preemptive_sjf_example() {
    let outcome = simulate(
        &[
            cpu("P1", 0, 6, 2),
            cpu("P2", 1, 8, 3),
            ProcessDescriptor::new("P3", 2, 7, 1, ProcessType::Io),
            cpu("P4", 3, 3, 4),
        ],
        SchedulerConfig::new(Algorithm::ShortestRemaining, Mode::NonPreemptive),
    )
    .unwrap();

    assert_eq!(completion_order(&outcome), vec!["P1", "P4", "P3", "P2"]);
    let waits: Vec<u64> = outcome.completed.iter().map(|p| p.waiting).collect();
    assert_eq!(waits, vec![0, 3, 7, 15]);
    assert_eq!(outcome.metrics.avg_waiting, 6.25);
    assert_eq!(outcome.metrics.context_switches, 3);
    assert_eq!(outcome.metrics.total_ticks, 24);
}

#[test]
fn test_fcfs_completes_in_arrival_order() {
    let outcome = simulate(
        &[cpu("C", 4, 2, 9), cpu("A", 0, 3, 1), cpu("B", 2, 1, 5)],
        SchedulerConfig::new(Algorithm::Fcfs, Mode::Preemptive),
    )
    .unwrap();

    assert_eq!(completion_order(&outcome), vec!["A", "B", "C"]);
    assert_eq!(outcome.events.of_kind(EventKind::Preempted).count(), 0);
}

#[test]
fn test_tie_break_by_id() {
    for algorithm in [Algorithm::Priority, Algorithm::ShortestRemaining, Algorithm::Fcfs] {
        let outcome = simulate(
            &[cpu("P3", 0, 2, 1), cpu("P1", 0, 2, 1), cpu("P2", 0, 2, 1)],
            SchedulerConfig::new(algorithm, Mode::Preemptive),
        )
        .unwrap();
        assert_eq!(completion_order(&outcome), vec!["P1", "P2", "P3"], "{algorithm}");
    }
}

#[test]
fn test_round_robin_tie_break_by_id() {
    let outcome = simulate(
        &[cpu("P2", 0, 3, 1), cpu("P1", 0, 3, 1)],
        SchedulerConfig::round_robin(2).unwrap(),
    )
    .unwrap();

    let dispatched: Vec<&str> = outcome
        .events
        .of_kind(EventKind::Dispatched)
        .filter_map(|e| e.process_id.as_deref())
        .collect();
    assert_eq!(dispatched, vec!["P1", "P2", "P1", "P2"]);
    assert_eq!(completion_order(&outcome), vec!["P1", "P2"]);
}

#[test]
fn test_from_records_rejects_tampered_records() {
    let config = SchedulerConfig::new(Algorithm::Fcfs, Mode::Preemptive);
    let mut record = ProcessRecord::new(&cpu("P1", 0, 4, 2)).unwrap();
    record.burst = 0;
    record.remaining = 0;

    let err = SchedulingEngine::from_records(vec![record], config).unwrap_err();
    assert_eq!(
        err,
        SchedulerError::from(ValidationError::NonPositiveBurst {
            id: "P1".into(),
            value: 0,
        })
    );
}

#[test]
fn test_idle_gap_is_accounted() {
    let outcome = simulate(
        &[cpu("P1", 0, 2, 1), cpu("P2", 5, 1, 1)],
        SchedulerConfig::new(Algorithm::Fcfs, Mode::NonPreemptive),
    )
    .unwrap();

    let idle: Vec<u64> = outcome
        .events
        .of_kind(EventKind::Idle)
        .map(|e| e.tick)
        .collect();
    assert_eq!(idle, vec![2, 3, 4]);
    assert_eq!(outcome.metrics.idle_time, 3);
    assert_eq!(outcome.metrics.total_ticks, 6);
    assert_eq!(outcome.metrics.cpu_utilization, 50.0);
    assert_eq!(finished(&outcome, "P2").response, Some(0));
}

#[test]
fn test_runs_are_idempotent() {
    let descriptors = [
        cpu("P1", 0, 5, 3),
        ProcessDescriptor::new("P2", 1, 3, 2, ProcessType::Io),
        cpu("P3", 2, 8, 1),
        cpu("P4", 3, 6, 4),
    ];
    for algorithm in Algorithm::ALL {
        let config = SchedulerConfig::new(algorithm, Mode::Preemptive);
        let first = simulate(&descriptors, config).unwrap();
        let second = simulate(&descriptors.clone(), config).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_invalid_input_is_rejected() {
    let config = SchedulerConfig::new(Algorithm::Fcfs, Mode::Preemptive);
    assert!(simulate(&[cpu("P1", 0, 0, 1)], config).is_err());
    assert!(simulate(&[cpu("P1", -1, 1, 1)], config).is_err());
    assert!(simulate(&[cpu("P1", 0, 1, 0)], config).is_err());
    assert!(simulate(&[cpu("", 0, 1, 1)], config).is_err());
    assert!(SchedulerConfig::round_robin(0).is_err());
    assert!(SchedulerConfig::parse("lottery", "preemptive", None).is_err());
    assert!(SchedulerConfig::parse("rr", "sometimes", Some(2)).is_err());
}

#[test]
fn test_lazy_stream_can_be_replayed() {
    let config = SchedulerConfig::round_robin(2).unwrap();
    let descriptors = [cpu("P1", 0, 5, 1), cpu("P2", 1, 3, 1)];

    let streamed: Vec<Event> = SchedulingEngine::new(&descriptors, config)
        .unwrap()
        .events()
        .collect();
    let outcome = simulate(&descriptors, config).unwrap();

    let mut replay = outcome.events.replay();
    let first_pass: Vec<Event> = replay.by_ref().cloned().collect();
    replay.reset();
    let second_pass: Vec<Event> = replay.cloned().collect();

    assert_eq!(streamed, first_pass);
    assert_eq!(first_pass, second_pass);
}
