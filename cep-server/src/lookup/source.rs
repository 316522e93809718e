//! Seams between the lookup client and the external services.

use async_trait::async_trait;

use crate::domain::{Cep, Ddd, Uf};

use super::error::LookupError;
use super::types::{Address, AreaCodeInfo};

/// A postal-code service.
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Fetch the address for a postal code. `Ok(None)` is the service's
    /// not-found answer.
    async fn address_by_cep(&self, cep: &Cep) -> Result<Option<Address>, LookupError>;

    /// Fetch every address matching a state, city and street. An empty
    /// vector means the service found nothing.
    async fn addresses_by_street(
        &self,
        uf: Uf,
        city: &str,
        street: &str,
    ) -> Result<Vec<Address>, LookupError>;
}

/// An area-code service.
#[async_trait]
pub trait AreaCodeSource: Send + Sync {
    /// Fetch the state and cities served by an area code.
    async fn area_code(&self, ddd: Ddd) -> Result<AreaCodeInfo, LookupError>;
}
