use reqwest::{Method, StatusCode};
use serde::Serialize;

use crate::sentiment::AnalysisResult;

pub(crate) const MSG_TICKER_REQUIRED: &str = "Ticker symbol is required";
pub(crate) const MSG_API_KEY_MISSING: &str = "API key not configured on server";
pub(crate) const MSG_RATE_LIMITED: &str = "API call limit reached. Please try again later.";
pub(crate) const MSG_ANALYSIS_FAILED: &str = "Failed to get AI analysis";

/// JSON body of a handler response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// `{ sentiment, relevance }`, also used for the not-found placeholder.
    Analysis(AnalysisResult),
    /// `{ error }`
    Error { error: String },
}

/// The single response produced for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: StatusCode,
    /// Value for the `Allow` header; only set on 405.
    pub allow: Option<Method>,
    /// `None` means an empty body.
    pub body: Option<ResponseBody>,
}

impl HandlerResponse {
    pub(crate) fn method_not_allowed(allow: Method) -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            allow: Some(allow),
            body: None,
        }
    }

    pub(crate) fn error(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            allow: None,
            body: Some(ResponseBody::Error {
                error: message.to_string(),
            }),
        }
    }

    pub(crate) fn analysis(status: StatusCode, result: AnalysisResult) -> Self {
        Self {
            status,
            allow: None,
            body: Some(ResponseBody::Analysis(result)),
        }
    }

    /// The body rendered as a JSON value, `None` for an empty body.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body.as_ref().map(|b| {
            serde_json::to_value(b).expect("ResponseBody holds only strings and JSON numbers")
        })
    }
}
