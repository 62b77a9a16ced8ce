//! Eviction events emitted at `trace` level.

use std::io;
use std::sync::Arc;

use pagesim::{PolicyKind, Trace};
use parking_lot::Mutex;

/// Shared in-memory sink for the fmt subscriber.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    sink.text()
}

#[test]
fn test_every_policy_logs_victim_and_incoming_page() {
    // Two frames, pages 1 and 2 resident: every policy picks 1 for 3
    let trace = Trace::from_pages([1, 2, 3]).unwrap();

    for policy in PolicyKind::all(4) {
        let output = capture(|| {
            let mut replacer = policy.build(2, &trace).unwrap();
            for &page in trace.pages() {
                replacer.admit(page).unwrap();
            }
        });

        let line = output
            .lines()
            .find(|line| line.contains("evict") && line.contains(&format!("policy=\"{policy}\"")))
            .unwrap_or_else(|| panic!("no eviction event for {policy}: {output}"));
        assert!(line.contains("victim=1"), "{policy}: {line}");
        assert!(line.contains("incoming=3"), "{policy}: {line}");
    }
}

#[test]
fn test_no_eviction_event_while_frames_fill() {
    let trace = Trace::from_pages([1, 2, 1]).unwrap();

    for policy in PolicyKind::all(4) {
        let output = capture(|| {
            let mut replacer = policy.build(2, &trace).unwrap();
            for &page in trace.pages() {
                replacer.admit(page).unwrap();
            }
        });
        assert!(!output.contains("victim="), "{policy}: {output}");
    }
}
