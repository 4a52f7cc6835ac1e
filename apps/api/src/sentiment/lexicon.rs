//! Lexicon-backed polarity scorer.
//!
//! Reads a VADER-format lexicon file at startup. If the file is missing it
//! is downloaded once and the load retried; a failure after that is fatal —
//! the service cannot classify without its lexicon. Scoring itself is pure
//! and synchronous, no I/O after construction.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use super::PolarityScorer;

/// Compound normalization: sum / sqrt(sum^2 + ALPHA), then clamp to [-1, 1].
const NORMALIZATION_ALPHA: f64 = 15.0;
/// A negated token's valence is flipped and damped by this scalar.
const NEGATION_SCALAR: f64 = -0.74;
/// How many preceding tokens are scanned for a negator.
const NEGATION_WINDOW: usize = 3;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nothing", "cannot", "can't", "cant", "don't",
    "dont", "won't", "wont", "isn't", "isnt", "ain't", "aint", "wasn't", "wasnt",
];

const DOWNLOAD_TIMEOUT_SECS: u64 = 30;

/// Lexicon-based polarity scorer. Read-only after construction, shared
/// across requests without locking.
pub struct LexiconScorer {
    valences: HashMap<String, f64>,
}

impl LexiconScorer {
    /// Parses a VADER-format lexicon: one `token<TAB>valence<TAB>...` line
    /// per entry. Lines without a parseable valence are skipped; an empty
    /// result is a load error.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut valences = HashMap::new();

        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(token), Some(valence)) = (fields.next(), fields.next()) else {
                continue;
            };
            let Ok(valence) = valence.trim().parse::<f64>() else {
                continue;
            };
            valences.insert(token.to_lowercase(), valence);
        }

        if valences.is_empty() {
            bail!("lexicon contains no usable entries");
        }

        Ok(Self { valences })
    }

    /// Loads the lexicon from `path`, downloading it from `url` first when
    /// the file does not exist or cannot be read.
    pub async fn load_or_fetch(path: &Path, url: &str) -> Result<Self> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "lexicon not readable at {} ({e}), fetching from {url}",
                    path.display()
                );
                let raw = fetch_lexicon(url).await?;
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await.ok();
                }
                tokio::fs::write(path, &raw)
                    .await
                    .with_context(|| format!("failed to write lexicon to {}", path.display()))?;
                info!("lexicon saved to {}", path.display());
                raw
            }
        };

        Self::parse(&raw)
    }

    fn compound(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text.split_whitespace().map(normalize_token).collect();

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.valences.get(token.as_str()) else {
                continue;
            };
            let window_start = i.saturating_sub(NEGATION_WINDOW);
            let negated = tokens[window_start..i]
                .iter()
                .any(|t| NEGATORS.contains(&t.as_str()));
            sum += if negated {
                valence * NEGATION_SCALAR
            } else {
                valence
            };
        }

        normalize(sum)
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f64> {
        Ok(self.compound(text))
    }
}

/// Lowercases a token and strips non-alphanumeric edges. Trimming only
/// touches the edges, so inner apostrophes in contractions survive.
fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

async fn fetch_lexicon(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .build()
        .context("failed to build lexicon download client")?;

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("lexicon download from {url} failed"))?;

    response
        .text()
        .await
        .context("lexicon download body was unreadable")
}
