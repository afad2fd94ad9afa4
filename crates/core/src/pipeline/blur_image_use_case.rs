use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::blurring::domain::grid_blurrer::GridBlurrer;
use crate::imaging::domain::grid_reader::GridReader;
use crate::imaging::domain::grid_writer::GridWriter;

use super::pipeline_logger::{NullPipelineLogger, PipelineLogger};

/// Progress callback: `(passes_completed, total_passes)`. Returning `false`
/// cancels the run before the next pass begins.
pub type ProgressFn = Box<dyn Fn(usize, usize) -> bool + Send>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("blur cancelled after {completed} of {total} passes")]
    Cancelled { completed: usize, total: usize },
}

/// Single-image blurring pipeline: read → blur N passes → write.
///
/// Cancellation is honored only between passes, so the grid is never
/// observed half-blurred. A cancelled run writes no output.
pub struct BlurImageUseCase {
    reader: Box<dyn GridReader>,
    writer: Box<dyn GridWriter>,
    blurrer: Box<dyn GridBlurrer>,
    passes: usize,
    logger: Box<dyn PipelineLogger>,
    on_progress: Option<ProgressFn>,
    cancelled: Arc<AtomicBool>,
}

impl BlurImageUseCase {
    pub fn new(
        reader: Box<dyn GridReader>,
        writer: Box<dyn GridWriter>,
        blurrer: Box<dyn GridBlurrer>,
        passes: usize,
    ) -> Self {
        Self {
            reader,
            writer,
            blurrer,
            passes,
            logger: Box::new(NullPipelineLogger),
            on_progress: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_logger(mut self, logger: Box<dyn PipelineLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_progress(mut self, on_progress: ProgressFn) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    pub fn with_cancel_flag(mut self, cancelled: Arc<AtomicBool>) -> Self {
        self.cancelled = cancelled;
        self
    }

    /// Reads the input image, applies the configured passes, and writes the result.
    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let start = Instant::now();
        let mut grid = self.reader.read(input_path)?;
        self.logger.timing("read", elapsed_ms(start));

        let (rows, cols) = grid.dimensions();
        self.logger.info(&format!(
            "Blurring {} ({cols}x{rows}) with {} passes",
            input_path.display(),
            self.passes
        ));

        for pass in 0..self.passes {
            if self.cancelled.load(Ordering::Relaxed) {
                log::warn!("Cancelled before pass {}", pass + 1);
                return Err(PipelineError::Cancelled {
                    completed: pass,
                    total: self.passes,
                }
                .into());
            }

            let start = Instant::now();
            self.blurrer.blur_once(&mut grid)?;
            self.logger.timing("blur", elapsed_ms(start));

            let done = pass + 1;
            self.logger.progress(done, self.passes);
            if let Some(cb) = &self.on_progress {
                if !cb(done, self.passes) {
                    self.cancelled.store(true, Ordering::Relaxed);
                }
            }
        }

        let start = Instant::now();
        self.writer.write(output_path, &grid)?;
        self.logger.timing("write", elapsed_ms(start));
        self.logger.summary();

        Ok(())
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
