use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::modules::correction::models::SelicSeries;

/// Store for the single active rate series; replaced atomically as a whole.
#[async_trait]
pub trait SelicRepository: Send + Sync {
    async fn get(&self) -> Result<SelicSeries>;

    async fn replace(&self, series: SelicSeries) -> Result<SelicSeries>;
}

pub struct InMemorySelicRepository {
    series: RwLock<SelicSeries>,
}

impl InMemorySelicRepository {
    pub fn new() -> Self {
        Self {
            series: RwLock::new(SelicSeries::empty()),
        }
    }

    pub fn with_series(series: SelicSeries) -> Self {
        Self {
            series: RwLock::new(series),
        }
    }
}

impl Default for InMemorySelicRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelicRepository for InMemorySelicRepository {
    async fn get(&self) -> Result<SelicSeries> {
        Ok(self.series.read().await.clone())
    }

    async fn replace(&self, series: SelicSeries) -> Result<SelicSeries> {
        let mut slot = self.series.write().await;
        *slot = series;
        Ok(slot.clone())
    }
}
