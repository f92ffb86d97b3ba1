use serde::Serialize;

use crate::{
    core::ProxyError,
    sentiment::wire::{ProviderResponse, RelevanceScore},
};

/// Sentiment of the news feed toward one ticker, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Categorical label such as `Bullish`, `Neutral` or `Bearish`.
    pub sentiment: String,
    /// The provider's relevance score, in the representation it was sent.
    pub relevance: RelevanceScore,
}

impl AnalysisResult {
    /// Placeholder body sent with a 404 when no feed item mentions the ticker.
    pub fn not_found() -> Self {
        Self {
            sentiment: "N/A".to_string(),
            relevance: RelevanceScore::from("No data found"),
        }
    }
}

/// How a provider payload answers a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The provider sent an advisory (`Note` / `Information`) instead of data.
    Throttled,
    /// No feed item carries sentiment for the ticker.
    NotFound,
    /// Sentiment from the first feed item that mentions the ticker.
    Found(AnalysisResult),
}

/// Classify `resp` for `ticker`. Matching is exact and case-sensitive.
///
/// The advisory check wins over any feed content.
///
/// # Errors
///
/// Returns [`ProxyError::Json`] if the feed does not have the expected shape and
/// [`ProxyError::Data`] if the matching entry lacks a label or score.
pub fn lookup(resp: &ProviderResponse, ticker: &str) -> Result<Lookup, ProxyError> {
    if resp.is_throttled() {
        return Ok(Lookup::Throttled);
    }

    let feed = resp.feed()?;
    let Some(entry) = feed.iter().find_map(|item| item.sentiment_for(ticker)) else {
        return Ok(Lookup::NotFound);
    };

    let sentiment = entry
        .sentiment_label
        .clone()
        .ok_or_else(|| ProxyError::Data(format!("sentiment_label for {ticker}")))?;
    let relevance = entry
        .relevance_score
        .clone()
        .ok_or_else(|| ProxyError::Data(format!("relevance_score for {ticker}")))?;

    Ok(Lookup::Found(AnalysisResult {
        sentiment,
        relevance,
    }))
}
