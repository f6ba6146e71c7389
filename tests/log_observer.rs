#![cfg(feature = "log")]

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use uniform_cost::prelude::*;
use uniform_cost::{LogObserver, TraceRecorder};

/// Keeps the lines written by the observer module, ignoring the engine's own summaries.
struct Capture;

static LINES: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static CAPTURE: Capture = Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().ends_with("observer") {
            LINES
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn take_lines() -> Vec<(Level, String)> {
    std::mem::take(&mut *LINES.lock().unwrap())
}

// one test per binary, the logger can only be installed once
#[test]
fn writes_every_expansion_at_its_level() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let grid: Grid = "1 2 1\n3 Z 1\n1 1 5".parse().unwrap();
    let (start, goal) = ((0, 0), (2, 2));

    let mut recorder = TraceRecorder::new();
    SearchEngine::new(&grid, SearchConfig::default())
        .run_observed(start, goal, &mut recorder)
        .unwrap();
    assert!(take_lines().is_empty());

    let mut observer = LogObserver::with_level(Level::Debug);
    let outcome = SearchEngine::new(&grid, SearchConfig::default())
        .run_observed(start, goal, &mut observer)
        .unwrap();
    assert!(outcome.is_found());

    let lines = take_lines();
    let snapshots = recorder.into_snapshots();
    let expected: usize = snapshots
        .iter()
        .map(|snapshot| 1 + snapshot.frontier.len() + snapshot.closed.len())
        .sum();
    // plus the goal line
    assert_eq!(lines.len(), expected + 1);
    assert!(lines.iter().all(|(level, _)| *level == Level::Debug));

    assert!(lines[0].1.starts_with("iteration 0: expanded"));
    let opened = lines
        .iter()
        .filter(|(_, line)| line.starts_with("  open   "))
        .count();
    let first_frontier = snapshots[0].frontier.len();
    assert!(lines[1..=first_frontier]
        .iter()
        .all(|(_, line)| line.starts_with("  open   ")));
    assert_eq!(
        opened,
        snapshots.iter().map(|s| s.frontier.len()).sum::<usize>()
    );
    assert!(lines.last().unwrap().1.starts_with("goal closed: "));

    // the default level is Trace, which is filtered out here
    let mut quiet = LogObserver::default();
    SearchEngine::new(&grid, SearchConfig::default())
        .run_observed(start, goal, &mut quiet)
        .unwrap();
    let lines = take_lines();
    assert!(lines.is_empty(), "{lines:?}");
}
