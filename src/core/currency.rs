//! Rate source abstraction

use async_trait::async_trait;

use crate::core::error::FetchError;
use crate::core::rates::RateStore;

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Populates `store` with every (date, currency, rate) the source publishes.
    async fn fetch(&self, store: &mut RateStore) -> Result<(), FetchError>;
}
