//! Postal-code search.

use crate::lookup::{Address, LookupClient, LookupError};

use super::error::QueryError;

/// Resolve a free-text postal code to its address.
///
/// Formatting is ignored ("01310-100" and "01310100" are the same query).
pub async fn search_cep(client: &LookupClient, input: &str) -> Result<Address, QueryError> {
    client
        .lookup_by_postal_code(input)
        .await
        .map_err(|e| match e {
            LookupError::InvalidInput(_) => QueryError::InvalidCep,
            LookupError::NotFound => QueryError::CepNotFound,
            other => QueryError::Lookup(other),
        })
}
