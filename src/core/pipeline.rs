use crate::core::{LineTransform, Pipeline, Storage, TextDocument, TransformResult};
use crate::utils::error::{FileTransformError, Result};
use crate::utils::text::split_lines;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Reads one file, maps every line through `T` and writes one file.
pub struct LinePipeline<S: Storage, T: LineTransform> {
    storage: S,
    transform: T,
    input_path: PathBuf,
    output_path: PathBuf,
}

impl<S: Storage, T: LineTransform> LinePipeline<S, T> {
    pub fn new(
        storage: S,
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        transform: T,
    ) -> Self {
        Self {
            storage,
            transform,
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    fn apply_line(&self, index: usize, line: &str) -> Result<String> {
        let line_number = index + 1;
        match catch_unwind(AssertUnwindSafe(|| self.transform.apply(line))) {
            Ok(Ok(modified)) => Ok(modified),
            Ok(Err(e)) => Err(FileTransformError::TransformFailed {
                line_number,
                message: e.to_string(),
            }),
            Err(payload) => Err(FileTransformError::unexpected(format!(
                "transformation panicked on line {}: {}",
                line_number,
                panic_message(payload.as_ref())
            ))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[async_trait::async_trait]
impl<S: Storage, T: LineTransform> Pipeline for LinePipeline<S, T> {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    async fn read(&self) -> Result<TextDocument> {
        tracing::debug!("Reading input file: {}", self.input_path.display());
        let bytes = self.storage.read_file(&self.input_path).await?;

        let content = String::from_utf8(bytes).map_err(|e| {
            FileTransformError::unexpected(format!(
                "'{}' is not valid UTF-8 text: {}",
                self.input_path.display(),
                e.utf8_error()
            ))
        })?;

        let lines = split_lines(&content);
        tracing::debug!("Read {} lines ({} bytes)", lines.len(), content.len());
        Ok(TextDocument::new(lines))
    }

    async fn transform(&self, document: TextDocument) -> Result<TransformResult> {
        let lines = document
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| self.apply_line(index, line))
            .collect::<Result<Vec<_>>>()?;

        Ok(TransformResult { lines })
    }

    async fn write(&self, result: TransformResult) -> Result<usize> {
        let content = result.content();
        tracing::debug!(
            "Writing {} lines ({} bytes) to {}",
            result.line_count(),
            content.len(),
            self.output_path.display()
        );

        self.storage
            .write_file(&self.output_path, content.as_bytes())
            .await?;

        Ok(result.line_count())
    }
}
