use indicatif::{ProgressBar, ProgressStyle};

use video_palette_core::pipeline::pipeline_logger::{PipelineLogger, StdoutPipelineLogger};

/// Draws frame extraction progress as a terminal bar.
///
/// Stage timings are kept by an inner [`StdoutPipelineLogger`] so the end of
/// run summary matches the plain logger's.
pub struct ProgressBarPipelineLogger {
    bar: ProgressBar,
    stats: StdoutPipelineLogger,
}

impl ProgressBarPipelineLogger {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template(
            "{spinner:.green} {bar:40.cyan/blue} {pos}/{len} frames {msg}",
        )?;
        bar.set_style(style.progress_chars("##-"));
        Ok(Self::with_bar(bar))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            stats: StdoutPipelineLogger::default(),
        }
    }
}

impl PipelineLogger for ProgressBarPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        let total = total.max(current) as u64;
        if self.bar.length() != Some(total) {
            self.bar.set_length(total);
        }
        self.bar.set_position(current as u64);
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.stats.timing(stage, duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.stats.metric(name, value);
    }

    fn info(&mut self, message: &str) {
        self.bar.suspend(|| log::info!("{message}"));
        self.bar.set_message(message.to_string());
    }

    fn summary(&self) {
        self.bar.finish_and_clear();
        self.stats.summary();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_moves_bar() {
        let mut logger = ProgressBarPipelineLogger::with_bar(ProgressBar::hidden());
        logger.progress(3, 10);
        assert_eq!(logger.bar.position(), 3);
        assert_eq!(logger.bar.length(), Some(10));
    }

    #[test]
    fn test_unknown_total_grows_with_position() {
        let mut logger = ProgressBarPipelineLogger::with_bar(ProgressBar::hidden());
        logger.progress(7, 0);
        assert_eq!(logger.bar.length(), Some(7));
    }

    #[test]
    fn test_timings_reach_summary() {
        let mut logger = ProgressBarPipelineLogger::with_bar(ProgressBar::hidden());
        logger.timing("reduce", 4.0);
        assert_eq!(logger.stats.timings_for("reduce").unwrap(), &[4.0]);
        logger.summary();
        assert!(logger.bar.is_finished());
    }

    #[test]
    fn test_metrics_reach_summary() {
        let mut logger = ProgressBarPipelineLogger::with_bar(ProgressBar::hidden());
        logger.metric("colors", 17.0);
        assert_eq!(logger.stats.metrics_for("colors").unwrap(), &[17.0]);
        assert!(logger.stats.summary_string().unwrap().contains("colors: avg 17.0"));
    }

    #[test]
    fn test_default_template_parses() {
        assert!(ProgressBarPipelineLogger::new().is_ok());
    }
}
