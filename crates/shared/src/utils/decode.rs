use crate::errors::ApiError;
use serde::de::DeserializeOwned;

/// Strict structural decode of a JSON body. Unknown fields are ignored.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}
