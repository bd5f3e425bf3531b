//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for encode/decode runs.
//!
//! Counters and timers are mutated during a run, then frozen into a
//! `TelemetrySnapshot` that the CLI prints with `--stats`.

pub mod counters;
pub mod snapshot;
pub mod timers;

pub use counters::TelemetryCounters;
pub use snapshot::TelemetrySnapshot;
pub use timers::{Stage, StageTimes, TelemetryTimer};
