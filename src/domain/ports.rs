use crate::domain::model::{StageReport, TextDocument, TransformResult};
use crate::utils::error::{FileTransformError, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

pub type LineError = Box<dyn std::error::Error + Send + Sync>;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &Path) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Maps one input line to one output line.
///
/// Every `Fn(&str) -> String` closure is a `LineTransform`; implement the
/// trait directly when a line can be rejected.
pub trait LineTransform: Send + Sync {
    fn apply(&self, line: &str) -> std::result::Result<String, LineError>;
}

impl<F> LineTransform for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn apply(&self, line: &str) -> std::result::Result<String, LineError> {
        Ok(self(line))
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;

    async fn read(&self) -> Result<TextDocument>;
    async fn transform(&self, document: TextDocument) -> Result<TransformResult>;
    async fn write(&self, result: TransformResult) -> Result<usize>;
}

/// Channel for the human-readable status of each stage.
pub trait StatusReporter: Send + Sync {
    fn stage(&self, report: &StageReport);
    fn failure(&self, error: &FileTransformError);
}

impl<R: StatusReporter + ?Sized> StatusReporter for Arc<R> {
    fn stage(&self, report: &StageReport) {
        (**self).stage(report)
    }

    fn failure(&self, error: &FileTransformError) {
        (**self).failure(error)
    }
}
