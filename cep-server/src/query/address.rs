//! Address search.

use crate::lookup::{Address, LookupClient, LookupError};

use super::error::QueryError;

/// Resolve a state, city and street to matching addresses, in the order the
/// service returns them.
///
/// Any missing or malformed field yields the single `IncompleteAddress`
/// error.
pub async fn search_address(
    client: &LookupClient,
    uf: &str,
    city: &str,
    street: &str,
) -> Result<Vec<Address>, QueryError> {
    client
        .lookup_by_address(uf, city, street)
        .await
        .map_err(|e| match e {
            LookupError::InvalidInput(_) => QueryError::IncompleteAddress,
            LookupError::NoResults => QueryError::NoAddressFound,
            other => QueryError::Lookup(other),
        })
}
