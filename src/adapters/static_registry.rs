//! In-memory client registry for offline runs and tests, built from a
//! configured allowlist.

use crate::domain::model::ClientCode;
use crate::domain::ports::ClientRegistry;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    known: HashSet<ClientCode>,
}

impl StaticRegistry {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            known: codes
                .into_iter()
                .filter_map(|code| ClientCode::parse(code.as_ref()))
                .collect(),
        }
    }
}

#[async_trait]
impl ClientRegistry for StaticRegistry {
    async fn filter_existing(
        &self,
        candidates: &HashSet<ClientCode>,
    ) -> Result<HashSet<ClientCode>> {
        Ok(candidates.intersection(&self.known).cloned().collect())
    }
}
