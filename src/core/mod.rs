pub mod etl;
pub mod mapper;
pub mod pipeline;
pub mod profile;

pub use crate::domain::model::{Record, SourceKind, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
