pub mod engine;
pub mod pipeline;
pub mod transforms;

pub use crate::domain::model::{RunReport, Stage, StageReport, TextDocument, TransformResult};
pub use crate::domain::ports::{LineError, LineTransform, Pipeline, StatusReporter, Storage};
pub use crate::utils::error::Result;
