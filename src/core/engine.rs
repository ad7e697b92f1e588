use crate::adapters::reporter::ConsoleReporter;
use crate::core::{Pipeline, RunReport, Stage, StageReport, StatusReporter};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;

pub struct TransformEngine<P: Pipeline> {
    pipeline: P,
    reporter: Box<dyn StatusReporter>,
    monitoring: bool,
}

impl<P: Pipeline> TransformEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitoring: bool) -> Self {
        Self {
            pipeline,
            reporter: Box::new(ConsoleReporter),
            monitoring,
        }
    }

    pub fn with_reporter(mut self, reporter: impl StatusReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Runs read, transform and write in order. A failure at any stage is
    /// reported and returned; later stages do not run.
    pub async fn run(&self) -> Result<RunReport> {
        match self.execute().await {
            Ok(report) => Ok(report),
            Err(e) => {
                tracing::error!(
                    "❌ Transformation failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                self.reporter.failure(&e);
                Err(e)
            }
        }
    }

    async fn execute(&self) -> Result<RunReport> {
        let started_at = Utc::now();
        let mut monitor = SystemMonitor::new(self.monitoring);
        let input_path = self.pipeline.input_path().to_path_buf();
        let output_path = self.pipeline.output_path().to_path_buf();
        let mut stages = Vec::with_capacity(3);

        tracing::info!(
            "🚀 Starting transformation: {} -> {}",
            input_path.display(),
            output_path.display()
        );

        // Read
        let document = self.pipeline.read().await?;
        let lines_read = document.line_count();
        stages.push(self.record(
            Stage::Read,
            format!("Successfully read from '{}'.", input_path.display()),
            lines_read,
        ));
        monitor.log_stage("Read");

        // Transform
        let result = self.pipeline.transform(document).await?;
        stages.push(self.record(
            Stage::Transform,
            "Content successfully modified.".to_string(),
            result.line_count(),
        ));
        monitor.log_stage("Transform");

        // Write
        let lines_written = self.pipeline.write(result).await?;
        stages.push(self.record(
            Stage::Write,
            format!(
                "Successfully wrote modified content to '{}'.",
                output_path.display()
            ),
            lines_written,
        ));
        monitor.log_stage("Write");
        monitor.log_final_stats();

        Ok(RunReport {
            input_path,
            output_path,
            lines_read,
            lines_written,
            stages,
            started_at,
            finished_at: Utc::now(),
        })
    }

    fn record(&self, stage: Stage, message: String, line_count: usize) -> StageReport {
        let report = StageReport {
            stage,
            message,
            line_count,
        };
        tracing::debug!("{:?} stage finished ({} lines)", stage, line_count);
        self.reporter.stage(&report);
        report
    }
}
