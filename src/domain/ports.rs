use crate::domain::model::ClientCode;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn registry_endpoint(&self) -> Option<&str>;
    fn authorized_codes(&self) -> &[String];
    fn output_path(&self) -> &str;
}

/// The external client registry. One capability: given a set of candidate
/// codes, return the subset present in the authoritative record store.
/// Implementations must answer with a single lookup per call.
#[async_trait]
pub trait ClientRegistry: Send + Sync {
    async fn filter_existing(
        &self,
        candidates: &HashSet<ClientCode>,
    ) -> Result<HashSet<ClientCode>>;
}
