use crate::errors::ApiError;
use reqwest::Client;

/// One pooled client per process; clones share the same connection pool.
pub fn create_client() -> Result<Client, ApiError> {
    let client = Client::builder().build()?;

    Ok(client)
}
