//! Meme API client — the single point of entry for content fetching.
//!
//! Fetch failures never escape this module: timeouts, non-2xx statuses and
//! malformed payloads all degrade to an empty result list. Filtering drops
//! NSFW items and truncates in upstream order; there is no re-ranking.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Items requested per upstream call.
const BATCH_SIZE: u32 = 50;
/// Per-attempt timeout. No retry.
const FETCH_TIMEOUT_SECS: u64 = 5;
/// Items returned to callers after filtering.
pub const RESULT_SIZE: usize = 6;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A single content item. Only `nsfw` is inspected; every other field the
/// API sends rides along in `extra` and is forwarded unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meme {
    pub url: String,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct MemeApiResponse {
    #[serde(default)]
    memes: Vec<Meme>,
}

/// Client for the meme content API.
#[derive(Clone)]
pub struct MemeClient {
    client: Client,
    base_url: String,
}

impl MemeClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// Fetches a batch for `category`, drops NSFW items, and truncates to
    /// the first `count` survivors in upstream order. Any fetch error
    /// degrades to an empty list.
    pub async fn fetch_safe(&self, category: &str, count: usize) -> Vec<Meme> {
        match self.fetch_batch(category).await {
            Ok(memes) => {
                let safe = filter_safe(memes, count);
                debug!("fetched {} safe memes for r/{category}", safe.len());
                safe
            }
            Err(e) => {
                warn!("meme API error for r/{category}: {e}");
                Vec::new()
            }
        }
    }

    async fn fetch_batch(&self, category: &str) -> Result<Vec<Meme>, FetchError> {
        let url = format!("{}/{}/{}", self.base_url, category, BATCH_SIZE);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: MemeApiResponse = response.json().await?;
        Ok(payload.memes)
    }
}

/// Drops NSFW items and truncates to `count`, preserving upstream order.
fn filter_safe(memes: Vec<Meme>, count: usize) -> Vec<Meme> {
    memes.into_iter().filter(|m| !m.nsfw).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_meme(url: &str, nsfw: bool) -> Meme {
        Meme {
            url: url.to_string(),
            nsfw,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_filter_drops_nsfw_and_preserves_order() {
        // 50 items, every fifth one flagged NSFW
        let memes: Vec<Meme> = (0..50)
            .map(|i| make_meme(&format!("https://img.example/{i}.png"), i % 5 == 0))
            .collect();

        let safe = filter_safe(memes, RESULT_SIZE);
        assert_eq!(safe.len(), RESULT_SIZE);
        // survivors keep upstream order: 1, 2, 3, 4, 6, 7
        let urls: Vec<&str> = safe.iter().map(|m| m.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://img.example/1.png",
                "https://img.example/2.png",
                "https://img.example/3.png",
                "https://img.example/4.png",
                "https://img.example/6.png",
                "https://img.example/7.png",
            ]
        );
    }

    #[test]
    fn test_filter_returns_fewer_when_not_enough_survive() {
        let memes = vec![
            make_meme("https://img.example/a.png", false),
            make_meme("https://img.example/b.png", true),
        ];
        let safe = filter_safe(memes, RESULT_SIZE);
        assert_eq!(safe.len(), 1);
        assert_eq!(safe[0].url, "https://img.example/a.png");
    }

    #[test]
    fn test_missing_nsfw_flag_defaults_to_safe() {
        let meme: Meme =
            serde_json::from_value(json!({"url": "https://img.example/x.png"})).unwrap();
        assert!(!meme.nsfw);
    }

    #[test]
    fn test_opaque_fields_pass_through_unchanged() {
        let raw = json!({
            "url": "https://img.example/x.png",
            "nsfw": false,
            "title": "relatable",
            "subreddit": "me_irl",
            "ups": 4200
        });
        let meme: Meme = serde_json::from_value(raw.clone()).unwrap();
        let round_tripped = serde_json::to_value(&meme).unwrap();
        assert_eq!(round_tripped, raw);
    }

    #[test]
    fn test_payload_without_memes_array_defaults_to_empty() {
        let payload: MemeApiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(payload.memes.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_api_degrades_to_empty_list() {
        let client = MemeClient::new("http://127.0.0.1:1/gimme".to_string());
        let memes = client.fetch_safe("me_irl", RESULT_SIZE).await;
        assert!(memes.is_empty());
    }
}
