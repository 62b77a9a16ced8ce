//! Replacement policy tests over reference streams from the page-replacement
//! literature.

use std::collections::HashSet;

use pagesim::{
    classify, simulate, simulate_with, CustomRule, PageId, Pattern, PolicyKind,
    SimulationConfig, Trace,
};

const BELADY_TRACE: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
const TEXTBOOK_TRACE: [u32; 13] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];

fn trace(ids: &[u32]) -> Trace {
    Trace::from_pages(ids.iter().copied()).unwrap()
}

fn faults(ids: &[u32], capacity: usize, policy: PolicyKind) -> u64 {
    simulate(&trace(ids), capacity, policy).unwrap().faults()
}

// ============================================================================
// Reference results
// ============================================================================

#[test]
fn test_fifo_belady_trace() {
    let result = simulate(&trace(&BELADY_TRACE), 3, PolicyKind::Fifo).unwrap();
    assert_eq!(result.faults(), 9);
    assert_eq!(result.hits(), 3);
}

#[test]
fn test_fifo_belady_anomaly() {
    // More frames, more faults
    assert_eq!(faults(&BELADY_TRACE, 3, PolicyKind::Fifo), 9);
    assert_eq!(faults(&BELADY_TRACE, 4, PolicyKind::Fifo), 10);
}

#[test]
fn test_lru_belady_trace() {
    let result = simulate(&trace(&BELADY_TRACE), 3, PolicyKind::Lru).unwrap();
    assert_eq!(result.faults(), 10);
    assert_eq!(result.hits(), 2);
}

#[test]
fn test_optimal_textbook_trace() {
    let result = simulate(&trace(&TEXTBOOK_TRACE), 3, PolicyKind::Optimal).unwrap();
    assert_eq!(result.faults(), 7);
    assert_eq!(result.hits(), 6);
}

#[test]
fn test_textbook_trace_all_policies() {
    assert_eq!(faults(&TEXTBOOK_TRACE, 3, PolicyKind::Fifo), 10);
    assert_eq!(faults(&TEXTBOOK_TRACE, 3, PolicyKind::Lru), 9);
    assert_eq!(faults(&TEXTBOOK_TRACE, 3, PolicyKind::SecondChance), 9);
}

#[test]
fn test_single_page_single_frame_all_policies() {
    let t = trace(&[1, 1, 1, 1]);

    for policy in PolicyKind::all(4) {
        let config = SimulationConfig::new(1).with_steps();
        let result = simulate_with(&t, policy, &config).unwrap();

        assert_eq!(result.faults(), 1, "{policy}");
        assert_eq!(result.hits(), 3, "{policy}");
        assert!(!result.steps[0].is_hit(), "{policy}");
        assert!(result.steps[1..].iter().all(|s| s.is_hit()), "{policy}");
    }
}

#[test]
fn test_sequential_trace_classification() {
    let t = trace(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(classify(&t), Pattern::Sequential);
}

// ============================================================================
// Frame table rendering per policy
// ============================================================================

fn rendered(ids: &[u32], capacity: usize, policy: PolicyKind) -> Vec<String> {
    let config = SimulationConfig::new(capacity).with_steps();
    simulate_with(&trace(ids), policy, &config)
        .unwrap()
        .steps
        .iter()
        .map(|s| s.frames.to_string())
        .collect()
}

#[test]
fn test_fifo_frames_keep_slots() {
    assert_eq!(
        rendered(&[1, 2, 3, 4, 1], 3, PolicyKind::Fifo),
        vec!["1 - -", "1 2 -", "1 2 3", "4 2 3", "4 1 3"]
    );
}

#[test]
fn test_lru_frames_most_recent_first() {
    assert_eq!(
        rendered(&[1, 2, 3, 1, 4], 3, PolicyKind::Lru),
        vec!["1 - -", "2 1 -", "3 2 1", "1 3 2", "4 1 3"]
    );
}

#[test]
fn test_optimal_frames_keep_slots() {
    assert_eq!(
        rendered(&[1, 2, 3, 4, 1, 2], 3, PolicyKind::Optimal),
        vec!["1 - -", "1 2 -", "1 2 3", "1 2 4", "1 2 4", "1 2 4"]
    );
}

#[test]
fn test_second_chance_frames_follow_queue() {
    assert_eq!(
        rendered(&[1, 2, 3, 4], 3, PolicyKind::SecondChance),
        vec!["1 - -", "1 2 -", "1 2 3", "2 3 4"]
    );
}

#[test]
fn test_occupancy_never_exceeds_capacity() {
    let t = trace(&TEXTBOOK_TRACE);
    for policy in PolicyKind::all(4) {
        let config = SimulationConfig::new(3).with_steps();
        let result = simulate_with(&t, policy, &config).unwrap();

        let mut seen = HashSet::new();
        for (i, step) in result.steps.iter().enumerate() {
            seen.insert(step.page);
            assert_eq!(step.frames.capacity(), 3);
            assert_eq!(step.frames.occupied(), seen.len().min(3), "{policy} step {i}");
            assert!(step.frames.contains(step.page), "{policy} step {i}");
        }
    }
}

// ============================================================================
// Custom rules end to end
// ============================================================================

#[test]
fn test_even_priority_keeps_even_pages() {
    let policy = PolicyKind::Custom(CustomRule::EvenPriority);
    let config = SimulationConfig::new(2).with_steps();
    let result = simulate_with(&trace(&[2, 4, 1, 4, 3, 2]), policy, &config).unwrap();

    // 1 evicts 2 (no odd resident), 3 evicts 1 (first odd), 2 evicts 3
    let evicted: Vec<Option<PageId>> = result.steps.iter().map(|s| s.access.evicted()).collect();
    assert_eq!(
        evicted,
        vec![
            None,
            None,
            Some(PageId::new(2)),
            None,
            Some(PageId::new(1)),
            Some(PageId::new(3)),
        ]
    );
}

#[test]
fn test_window_size_changes_outcome() {
    let ids = [1, 1, 1, 2, 3, 1, 2, 3];
    let narrow = PolicyKind::Custom(CustomRule::FewestInWindow { window: 1 });
    let wide = PolicyKind::Custom(CustomRule::FewestInWindow { window: 8 });

    assert_eq!(faults(&ids, 2, narrow), 6);
    assert_eq!(faults(&ids, 2, wide), 5);
}
