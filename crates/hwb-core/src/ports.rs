use async_trait::async_trait;

use crate::Result;

/// Read side of the homework review API.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch homework statuses changed since `from_date` (Unix seconds).
    ///
    /// Returns the raw JSON body; shape checks belong to
    /// [`crate::validation::check_response`].
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value>;
}
