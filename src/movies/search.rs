use async_trait::async_trait;

use super::model::Movie;

/// Looks a movie up by title.
///
/// Implementations never fail: "not found" and transport problems come back
/// as a `Movie` whose `error_message` is set and non-empty. Retries and
/// timeouts are the implementation's business.
#[async_trait]
pub trait MovieSearch: Send + Sync {
    async fn search(&self, title: &str) -> Movie;
}
