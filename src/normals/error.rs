use crate::types::family::Family;
use thiserror::Error;

/// Why a variable family could not be reported.
///
/// None of these abort a lookup: the affected family degrades to null fields
/// and the other family is unaffected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalsError {
    /// The payload has no recognizable date array or no recognizable variable array.
    #[error("Malformed daily payload: {0}")]
    MalformedPayload(String),

    /// The transport layer could not obtain a payload at all.
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The payload parsed but no calendar month holds a single usable value.
    #[error("No usable {family} data in {observations} parsed observations")]
    InsufficientData { family: Family, observations: usize },
}
