//! Scenario tests for the simulation driver.
//!
//! Classic textbook reference strings, traced by hand.

use std::fs;

use pagesim::{compare, run, Page, PolicyKind, SimConfig, Simulator, TextReporter};
use tempfile::tempdir;

fn pages(s: &str) -> Vec<Page> {
    Page::parse_sequence(s)
}

fn faults(policy: PolicyKind, capacity: i64, refs: &str) -> u64 {
    run(policy, capacity, &pages(refs)).unwrap().total_faults()
}

fn rendered(frames: &[pagesim::SlotState]) -> Vec<String> {
    frames.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Three frames, ABCABDABCD
// ============================================================================

const SHORT: &str = "ABCABDABCD";

#[test]
fn test_short_string_fault_counts() {
    assert_eq!(faults(PolicyKind::Fifo, 3, SHORT), 8);
    assert_eq!(faults(PolicyKind::Lru, 3, SHORT), 6);
    assert_eq!(faults(PolicyKind::Clock, 3, SHORT), 8);
    assert_eq!(faults(PolicyKind::Optimal, 3, SHORT), 5);
}

#[test]
fn test_short_string_fifo_trace() {
    let result = run(PolicyKind::Fifo, 3, &pages(SHORT)).unwrap();

    let verdicts: Vec<bool> = result.steps.iter().map(|s| s.fault).collect();
    assert_eq!(
        verdicts,
        vec![true, true, true, false, false, true, true, true, true, true]
    );

    let victims: Vec<Option<Page>> = result.steps.iter().map(|s| s.evicted).collect();
    let p = |c| Some(Page::new(c));
    assert_eq!(
        victims,
        vec![None, None, None, None, None, p('A'), p('B'), p('C'), p('D'), p('A')]
    );

    assert_eq!(rendered(result.final_frames().unwrap()), vec!["C", "D", "B"]);
}

#[test]
fn test_short_string_lru_victims() {
    let result = run(PolicyKind::Lru, 3, &pages(SHORT)).unwrap();
    let victims: Vec<(usize, Page)> = result
        .steps
        .iter()
        .filter_map(|s| s.evicted.map(|v| (s.index, v)))
        .collect();

    assert_eq!(
        victims,
        vec![(5, Page::new('C')), (8, Page::new('D')), (9, Page::new('A'))]
    );
    // D took C's slot, C took D's slot, D took A's slot.
    assert_eq!(rendered(result.final_frames().unwrap()), vec!["D", "B", "C"]);
}

#[test]
fn test_short_string_clock_trace() {
    let result = run(PolicyKind::Clock, 3, &pages(SHORT)).unwrap();

    assert_eq!(rendered(&result.steps[4].frames), vec!["A*", "B*", "C*"]);
    // All flags set: a full sweep clears them and lands back on slot 0.
    assert_eq!(rendered(&result.steps[5].frames), vec!["D*", "B", "C"]);
    assert_eq!(rendered(&result.steps[6].frames), vec!["D*", "A*", "C"]);
    assert_eq!(rendered(result.final_frames().unwrap()), vec!["C*", "D*", "B"]);
}

#[test]
fn test_short_string_optimal_victims() {
    let result = run(PolicyKind::Optimal, 3, &pages(SHORT)).unwrap();
    let victims: Vec<(usize, Page)> = result
        .steps
        .iter()
        .filter_map(|s| s.evicted.map(|v| (s.index, v)))
        .collect();

    // At 5, C is needed last. At 8, neither A nor B recurs; A is in the lower slot.
    assert_eq!(victims, vec![(5, Page::new('C')), (8, Page::new('A'))]);
}

// ============================================================================
// Belady's anomaly reference string
// ============================================================================

const BELADY: &str = "123412512345";

#[test]
fn test_fifo_belady_anomaly() {
    assert_eq!(faults(PolicyKind::Fifo, 3, BELADY), 9);
    assert_eq!(faults(PolicyKind::Fifo, 4, BELADY), 10);
}

#[test]
fn test_optimal_on_belady_string() {
    assert_eq!(faults(PolicyKind::Optimal, 3, BELADY), 7);
    assert_eq!(faults(PolicyKind::Optimal, 4, BELADY), 6);
}

#[test]
fn test_lru_on_belady_string() {
    assert_eq!(faults(PolicyKind::Lru, 3, BELADY), 10);
    assert_eq!(faults(PolicyKind::Lru, 4, BELADY), 8);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_single_frame_repeated_page() {
    for policy in PolicyKind::ALL {
        let result = run(policy, 1, &pages("XXX")).unwrap();

        let verdicts: Vec<bool> = result.steps.iter().map(|s| s.fault).collect();
        assert_eq!(verdicts, vec![true, false, false], "{}", policy);
        assert_eq!(result.total_faults(), 1);
        assert_eq!(
            result.final_frames().unwrap()[0].page,
            Some(Page::new('X')),
            "{}",
            policy
        );
    }
}

#[test]
fn test_fewer_distinct_pages_than_frames() {
    for policy in PolicyKind::ALL {
        let result = run(policy, 4, &pages("ABABBAABA")).unwrap();
        assert_eq!(result.total_faults(), 2, "{}", policy);
        assert_eq!(result.stats.evictions, 0, "{}", policy);
        assert_eq!(result.final_frames().unwrap()[2].page, None);
    }
}

#[test]
fn test_empty_reference_string() {
    for result in compare(3, &[]).unwrap() {
        assert_eq!(result.total_faults(), 0);
        assert!(result.steps.is_empty());
    }
}

#[test]
fn test_invalid_config_is_config_error() {
    let err = SimConfig::parse("mru", 3).unwrap_err();
    assert!(err.is_config_error());

    let err = run(PolicyKind::Fifo, 0, &pages("AB")).unwrap_err();
    assert!(err.is_config_error());

    let err = "AB".parse::<Page>().unwrap_err();
    assert!(err.is_config_error());
}

// ============================================================================
// Reporting to a file
// ============================================================================

#[test]
fn test_trace_written_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.txt");

    let config = SimConfig::new(PolicyKind::Lru, 3).unwrap();
    let file = fs::File::create(&path).unwrap();
    let mut reporter = TextReporter::new(file);
    Simulator::new(config)
        .run_with(&pages(SHORT), &mut reporter)
        .unwrap();
    drop(reporter);

    let trace = fs::read_to_string(&path).unwrap();
    assert_eq!(trace.matches("Sequence Number:").count(), 10);
    assert_eq!(trace.matches("Page Fault: true").count(), 6);
    assert_eq!(trace.matches("Victim:").count(), 3);
    assert!(trace.ends_with("Total page faults: 6\n"));
}
