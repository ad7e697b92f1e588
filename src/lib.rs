pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TransformerConfig;

pub use crate::adapters::{
    prompt::PathPrompter,
    reporter::{ConsoleReporter, MemoryReporter},
    storage::LocalStorage,
};
pub use crate::core::{
    engine::TransformEngine,
    pipeline::LinePipeline,
    transforms::{PrefixUppercase, TrimMode, TryLineFn},
    LineTransform, RunReport, Stage,
};
pub use crate::utils::error::{FileTransformError, Result};

use std::path::Path;

/// Reads `input`, applies `transform_fn` to every line and writes `output`,
/// printing the status of each stage to the console.
pub async fn transform<T: LineTransform>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    transform_fn: T,
) -> Result<RunReport> {
    let pipeline = LinePipeline::new(
        LocalStorage::default(),
        input.as_ref(),
        output.as_ref(),
        transform_fn,
    );
    TransformEngine::new(pipeline).run().await
}
