//! The lookup client: input checks in front of the two services.

use std::sync::Arc;

use crate::brasilapi::{BrasilApiClient, BrasilApiConfig};
use crate::cache::{AreaCodeCache, CacheConfig, CachedAreaCodes};
use crate::domain::{Cep, Ddd, Uf};
use crate::viacep::{ViaCepClient, ViaCepConfig};

use super::error::LookupError;
use super::source::{AddressSource, AreaCodeSource};
use super::types::{Address, AreaCodeInfo};

/// Remote lookup client.
///
/// Validates input before any request is made, turns the services' empty
/// answers into `NotFound` / `NoResults`, and serves area codes through the
/// session cache. Cloning is cheap; clones share the cache.
#[derive(Clone)]
pub struct LookupClient {
    addresses: Arc<dyn AddressSource>,
    area_codes: Arc<CachedAreaCodes>,
}

impl LookupClient {
    /// Create a client over the given sources and cache.
    pub fn new(
        addresses: impl AddressSource + 'static,
        area_codes: impl AreaCodeSource + 'static,
        cache: AreaCodeCache,
    ) -> Self {
        Self {
            addresses: Arc::new(addresses),
            area_codes: Arc::new(CachedAreaCodes::new(Arc::new(area_codes), cache)),
        }
    }

    /// Create a client talking to the real services.
    pub fn live(
        viacep: ViaCepConfig,
        brasilapi: BrasilApiConfig,
        cache: &CacheConfig,
    ) -> Result<Self, LookupError> {
        Ok(Self::new(
            ViaCepClient::new(viacep)?,
            BrasilApiClient::new(brasilapi)?,
            AreaCodeCache::new(cache),
        ))
    }

    /// Resolve a postal code to its address.
    ///
    /// Formatting characters are ignored; anything that does not leave
    /// exactly 8 digits fails with `InvalidInput` and no request is made.
    pub async fn lookup_by_postal_code(&self, input: &str) -> Result<Address, LookupError> {
        let cep =
            Cep::parse_normalized(input).map_err(|e| LookupError::InvalidInput(e.to_string()))?;

        self.addresses
            .address_by_cep(&cep)
            .await?
            .ok_or(LookupError::NotFound)
    }

    /// Resolve a partial address to the matching addresses, in the order
    /// the service returns them.
    pub async fn lookup_by_address(
        &self,
        uf: &str,
        city: &str,
        street: &str,
    ) -> Result<Vec<Address>, LookupError> {
        let uf = Uf::parse_normalized(uf).map_err(|e| LookupError::InvalidInput(e.to_string()))?;
        let city = city.trim();
        let street = street.trim();
        if city.is_empty() || street.is_empty() {
            return Err(LookupError::InvalidInput(
                "city and street are required".to_string(),
            ));
        }

        let found = self.addresses.addresses_by_street(uf, city, street).await?;
        if found.is_empty() {
            return Err(LookupError::NoResults);
        }
        Ok(found)
    }

    /// The state and cities for an area code, cached for the session.
    pub async fn lookup_area_code(&self, ddd: Ddd) -> Result<Arc<AreaCodeInfo>, LookupError> {
        self.area_codes.get(ddd).await
    }
}
