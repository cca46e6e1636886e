use crate::{domain::requests::TimeWindow, errors::ApiError};
use reqwest::Url;

/// The upstream operations this client knows how to address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ListAccounts,
    ListTransactions {
        account_uid: String,
        category_uid: String,
        window: TimeWindow,
    },
}

impl Endpoint {
    pub fn list_transactions(account_uid: &str, category_uid: &str, window: TimeWindow) -> Self {
        Endpoint::ListTransactions {
            account_uid: account_uid.to_string(),
            category_uid: category_uid.to_string(),
            window,
        }
    }

    /// Joins the operation's path and query onto `base_url`.
    ///
    /// Identifiers are pushed as single path segments, so reserved characters
    /// such as `/` or `?` are percent-encoded rather than reinterpreted.
    pub fn build_url(&self, base_url: &str) -> Result<Url, ApiError> {
        let mut url = parse_base(base_url)?;

        match self {
            Endpoint::ListAccounts => {
                push_segments(&mut url, &["api", "v2", "accounts"])?;
            }
            Endpoint::ListTransactions {
                account_uid,
                category_uid,
                window,
            } => {
                let account_uid = require_identifier("account", account_uid)?;
                let category_uid = require_identifier("category", category_uid)?;

                push_segments(
                    &mut url,
                    &[
                        "api",
                        "v2",
                        "feed",
                        "account",
                        account_uid,
                        "category",
                        category_uid,
                        "transactions-between",
                    ],
                )?;

                url.query_pairs_mut()
                    .append_pair("minTransactionTimestamp", &window.min_timestamp())
                    .append_pair("maxTransactionTimestamp", &window.max_timestamp());
            }
        }

        Ok(url)
    }
}

fn parse_base(base_url: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(base_url.trim())
        .map_err(|e| ApiError::InvalidEndpoint(format!("base URL '{base_url}': {e}")))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidEndpoint(format!(
            "base URL '{base_url}' must be an absolute http(s) URL"
        )));
    }

    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

fn push_segments(url: &mut Url, segments: &[&str]) -> Result<(), ApiError> {
    let mut path = url
        .path_segments_mut()
        .map_err(|_| ApiError::InvalidEndpoint("base URL cannot carry a path".to_string()))?;

    path.pop_if_empty().extend(segments);

    Ok(())
}

fn require_identifier<'a>(kind: &str, value: &'a str) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidEndpoint(format!("{kind} identifier is empty")));
    }

    Ok(value)
}
