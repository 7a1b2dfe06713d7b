//! Data source seam
//!
//! `load()` repopulates a store from whatever stands behind this trait.
//! Today that is bundled seed data behind a short simulated delay; a
//! remote source slots in here later without touching the stores.

use std::time::Duration;

use async_trait::async_trait;

/// Where a store's records come from on `load()`. Fetching cannot fail:
/// the contract is a wholesale snapshot of the collection.
#[async_trait]
pub trait DataSource<T>: Send + Sync {
    async fn fetch(&self) -> Vec<T>;
}

/// Static seed records served after a simulated fetch delay.
pub struct SeedSource<T> {
    records: Vec<T>,
    delay: Duration,
}

impl<T> SeedSource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            delay: Duration::from_millis(300),
        }
    }

    /// Override the simulated delay (tests use zero).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> DataSource<T> for SeedSource<T> {
    async fn fetch(&self) -> Vec<T> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_source_serves_snapshot() {
        let source = SeedSource::new(vec![1, 2, 3]).with_delay(Duration::ZERO);
        assert_eq!(source.fetch().await, vec![1, 2, 3]);
        // Repeat fetches serve the same snapshot.
        assert_eq!(source.fetch().await, vec![1, 2, 3]);
    }
}
