// Logs through the `log` facade when the feature is enabled
#[cfg(feature = "log")]
macro_rules! search_log {
    ($level: ident, $($arg: tt)+) => {
        log::$level!($($arg)+)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! search_log {
    // does nothing without log feature
    ($level: ident, $($arg: tt)+) => {};
}

mod closed;
mod engine;
mod frontier;
mod node;
mod observer;

pub use closed::ClosedSet;
pub use engine::{SearchEngine, SearchOutcome};
pub use node::SearchNode;
#[cfg(feature = "log")]
pub use observer::LogObserver;
pub use observer::{SearchObserver, Snapshot, Step, TraceRecorder};
