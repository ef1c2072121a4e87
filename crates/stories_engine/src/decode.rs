use crate::{SearchHit, SearchResponse};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response is not valid search JSON: {message}")]
    Malformed { message: String },
}

/// Decodes a search response body into its hits, keeping the server's order.
pub fn decode_hits(bytes: &[u8]) -> Result<Vec<SearchHit>, DecodeError> {
    let response: SearchResponse =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Malformed {
            message: err.to_string(),
        })?;
    Ok(response.hits)
}
