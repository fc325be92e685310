use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::quality::domain::verdict::Verdict;

/// Observer for capture-session events.
///
/// Keeps the session loop free of output concerns: the CLI logs a summary,
/// embedders can forward events to their own telemetry, tests stay silent.
/// Nothing reported here feeds back into a verdict.
pub trait SessionLogger: Send {
    /// Record how long a named stage took for one frame.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record the verdict of one admitted sample.
    fn verdict(&mut self, timestamp: Duration, verdict: &Verdict);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-session summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullSessionLogger;

impl SessionLogger for NullSessionLogger {
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn verdict(&mut self, _timestamp: Duration, _verdict: &Verdict) {}
    fn info(&mut self, _message: &str) {}
}

/// Running count and total duration of one stage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageTiming {
    pub calls: usize,
    pub total_ms: f64,
}

impl StageTiming {
    pub fn average_ms(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.total_ms / self.calls as f64
        }
    }
}

/// Aggregates per-stage timings and verdict counts and reports them
/// through the `log` facade. Memory stays constant however long the
/// session runs.
pub struct SummarySessionLogger {
    timings: HashMap<String, StageTiming>,
    verdicts: HashMap<Verdict, usize>,
    start_time: Instant,
}

impl SummarySessionLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            verdicts: HashMap::new(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary string, or `None` if nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.verdicts.is_empty() {
            return None;
        }

        let elapsed_s = self.start_time.elapsed().as_secs_f64();
        let evaluations: usize = self.verdicts.values().sum();
        let mut lines = vec![format!(
            "Session summary ({evaluations} evaluations, {elapsed_s:.1}s total):"
        )];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let timing = &self.timings[stage];
            lines.push(format!(
                "  {stage:10}: avg {:6.2}ms  total {:7.1}ms  ({} calls)",
                timing.average_ms(),
                timing.total_ms,
                timing.calls
            ));
        }

        let mut verdicts: Vec<(String, usize)> = self
            .verdicts
            .iter()
            .map(|(v, n)| (v.to_string(), *n))
            .collect();
        verdicts.sort();
        for (label, count) in verdicts {
            lines.push(format!("  {label}: {count}"));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<StageTiming> {
        self.timings.get(stage).copied()
    }

    pub fn verdict_count(&self, verdict: &Verdict) -> usize {
        self.verdicts.get(verdict).copied().unwrap_or(0)
    }
}

impl Default for SummarySessionLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionLogger for SummarySessionLogger {
    fn timing(&mut self, stage: &str, duration_ms: f64) {
        let timing = self.timings.entry(stage.to_string()).or_default();
        timing.calls += 1;
        timing.total_ms += duration_ms;
    }

    fn verdict(&mut self, timestamp: Duration, verdict: &Verdict) {
        *self.verdicts.entry(*verdict).or_default() += 1;
        log::debug!(
            "Sample at {}ms: {verdict} -> {}",
            timestamp.as_millis(),
            verdict.instruction()
        );
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
