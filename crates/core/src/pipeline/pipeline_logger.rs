use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting logger for pipeline orchestration events.
///
/// Decouples the use case from specific output mechanisms so each caller
/// can observe pipeline behavior without changing the orchestration code.
pub trait PipelineLogger: Send {
    /// Report pass-level progress.
    fn progress(&mut self, current: usize, total: usize);

    /// Record how long a named pipeline stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-pipeline summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger backed by the `log` facade.
///
/// Tracks per-stage timings and reports a summary at completion.
pub struct LogPipelineLogger {
    timings: HashMap<String, Vec<f64>>,
    start_time: Instant,
    passes_done: usize,
    total_passes: usize,
}

impl LogPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            start_time: Instant::now(),
            passes_done: 0,
            total_passes: 0,
        }
    }

    /// Returns the formatted summary string, or `None` if no timings recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!(
            "Pipeline summary ({}/{} passes, {:.1}s total):",
            self.passes_done,
            self.total_passes,
            elapsed_ms / 1000.0
        )];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = total_ms / durations.len() as f64;
            lines.push(format!(
                "  {stage:8}: avg {avg_ms:7.1}ms  total {total_ms:7.0}ms  ({}x)",
                durations.len()
            ));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.passes_done = current;
        self.total_passes = total;
        log::info!("Blur pass {current}/{total}");
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.progress(1, 5);
        logger.timing("blur", 5.0);
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_timing_records_values() {
        let mut logger = LogPipelineLogger::new();
        logger.timing("blur", 20.0);
        logger.timing("blur", 30.0);
        logger.timing("read", 5.0);

        let blur = logger.timings_for("blur").unwrap();
        assert_eq!(blur.len(), 2);
        assert!((blur[1] - 30.0).abs() < f64::EPSILON);
        assert_eq!(logger.timings_for("read").unwrap().len(), 1);
        assert!(logger.timings_for("write").is_none());
    }

    #[test]
    fn test_progress_tracks_passes() {
        let mut logger = LogPipelineLogger::new();
        for i in 1..=3 {
            logger.progress(i, 5);
        }
        assert_eq!(logger.passes_done, 3);
        assert_eq!(logger.total_passes, 5);
    }

    #[test]
    fn test_summary_includes_stages_and_passes() {
        let mut logger = LogPipelineLogger::new();
        logger.progress(2, 2);
        logger.timing("blur", 4.0);
        logger.timing("write", 1.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Pipeline summary (2/2 passes"));
        assert!(summary.contains("blur"));
        assert!(summary.contains("write"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        assert!(LogPipelineLogger::new().summary_string().is_none());
    }
}
