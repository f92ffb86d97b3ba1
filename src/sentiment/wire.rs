use serde::{Deserialize, Serialize};

use crate::core::ProxyError;

/// Decoded body of a `NEWS_SENTIMENT` query.
///
/// A fulfilled response carries `feed`; a throttled one carries `Note` or
/// `Information` instead. Only presence of the advisory fields matters.
///
/// `feed` is kept raw and typed on demand by [`ProviderResponse::feed`], so an
/// advisory is recognised whatever shape the accompanying feed has.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderResponse {
    pub(crate) feed: Option<serde_json::Value>,
    #[serde(rename = "Note")]
    pub(crate) note: Option<serde_json::Value>,
    #[serde(rename = "Information")]
    pub(crate) information: Option<serde_json::Value>,
}

/// One news record, tagged with sentiment toward one or more tickers.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedItem {
    pub(crate) ticker_sentiment: Vec<TickerSentiment>,
}

/// Sentiment of one feed item toward one ticker.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerSentiment {
    pub(crate) ticker: Option<String>,
    pub(crate) sentiment_label: Option<String>,
    pub(crate) relevance_score: Option<RelevanceScore>,
}

/// The provider sends scores as decimal strings, occasionally as bare numbers.
/// Either form is passed through to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelevanceScore {
    Text(String),
    Number(serde_json::Number),
}

impl From<&str> for RelevanceScore {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl ProviderResponse {
    /// True when the provider answered with an advisory instead of data.
    pub fn is_throttled(&self) -> bool {
        self.note.is_some() || self.information.is_some()
    }

    /// The advisory text, `Note` first.
    pub fn advisory(&self) -> Option<&serde_json::Value> {
        self.note.as_ref().or(self.information.as_ref())
    }

    /// The news feed; empty when the provider omitted it or sent `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Json`] if `feed` is not a list of feed items.
    pub fn feed(&self) -> Result<Vec<FeedItem>, ProxyError> {
        match &self.feed {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(raw) => Ok(Vec::<FeedItem>::deserialize(raw)?),
        }
    }
}

impl FeedItem {
    pub(crate) fn sentiment_for(&self, ticker: &str) -> Option<&TickerSentiment> {
        self.ticker_sentiment
            .iter()
            .find(|t| t.ticker.as_deref() == Some(ticker))
    }
}
