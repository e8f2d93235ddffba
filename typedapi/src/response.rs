//! Decoding of transport responses into typed results.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::transport::TransportResponse;
use crate::types::ElasticsearchError;

/// Decodes a response as `R` on success, or as an [`ElasticsearchError`]
/// otherwise.
///
/// A server error without a `status` field gets the HTTP status. A body
/// that is not valid JSON for the expected shape is an
/// [`ApiError::Decode`] on either path.
pub fn decode<R: DeserializeOwned>(
    endpoint: &'static str,
    response: TransportResponse,
) -> Result<R, ApiError> {
    let status = response.status;
    let malformed = |source| ApiError::Decode {
        endpoint,
        status,
        source,
    };

    if response.is_success() {
        return serde_json::from_slice(&response.body).map_err(malformed);
    }

    let mut error: ElasticsearchError =
        serde_json::from_slice(&response.body).map_err(malformed)?;
    if error.status == 0 {
        error.status = status;
    }
    Err(ApiError::Server(error))
}
