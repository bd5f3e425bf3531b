//! telemetry/timers.rs
//! Stage timers for encode and decode runs.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// Frequency scan over the input.
    Count,
    /// Tree construction and code assignment.
    Build,
    /// Bit packing of the payload.
    Encode,
    /// Header and code table parsing.
    Read,
    /// Payload bit walk through the decode trie.
    Decode,
    /// Header and code table output.
    Write,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Count => "count",
            Stage::Build => "build",
            Stage::Encode => "encode",
            Stage::Read => "read",
            Stage::Decode => "decode",
            Stage::Write => "write",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated time per stage, in pipeline order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes(BTreeMap<Stage, Duration>);

impl StageTimes {
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.0.entry(stage).or_default() += dur;
    }

    pub fn get(&self, stage: Stage) -> Option<Duration> {
        self.0.get(&stage).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stage, Duration)> + '_ {
        self.0.iter().map(|(s, d)| (*s, *d))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Wall clock for a whole run plus per-stage accumulators.
///
/// A disabled timer still tracks total elapsed time but records no stages.
#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    started: Instant,
    finished: Option<Instant>,
    stages: StageTimes,
    enabled: bool,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::with_stages(true)
    }
}

impl TelemetryTimer {
    pub fn with_stages(enabled: bool) -> Self {
        Self {
            started: Instant::now(),
            finished: None,
            stages: StageTimes::default(),
            enabled,
        }
    }

    /// Freeze `elapsed()` at the current instant.
    pub fn finish(&mut self) {
        self.finished = Some(Instant::now());
    }

    /// Run `f` and charge its duration to `stage`.
    pub fn measure<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t = Instant::now();
        let out = f();
        if self.enabled {
            self.stages.add(stage, t.elapsed());
        }
        out
    }

    pub fn stages(&self) -> &StageTimes {
        &self.stages
    }

    pub fn elapsed(&self) -> Duration {
        self.finished.unwrap_or_else(Instant::now) - self.started
    }
}
