use crate::domain::model::{SourceKind, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn source_kind(&self) -> SourceKind;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    /// File name without extension used for every output format.
    fn output_basename(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<serde_json::Value>>;
    async fn transform(&self, data: Vec<serde_json::Value>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
