use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode JSON response from {0}")]
    JsonDecode(String, #[source] reqwest::Error),

    #[error("{provider} returned no elevation: {reason}")]
    NoElevation {
        provider: &'static str,
        reason: String,
    },

    #[error("Could not resolve elevation after {attempts} attempt(s); last error: {last_error}")]
    AllProvidersFailed {
        attempts: usize,
        #[source]
        last_error: Box<ProviderError>,
    },
}
