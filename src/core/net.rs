use url::Url;

use crate::core::{ProxyError, client::API_KEY_PARAM};

/// Render `url` with the credential query value replaced, for errors and logs.
pub(crate) fn redacted(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    let mut out = url.clone();
    if !pairs.is_empty() {
        out.query_pairs_mut().clear().extend_pairs(pairs);
    }
    out.to_string()
}

/// Strip the request URL from a transport error; it carries the credential.
pub(crate) fn transport(err: reqwest::Error) -> ProxyError {
    ProxyError::Http(err.without_url())
}
