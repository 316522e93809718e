//! In-memory lookup sources for tests and offline development.
//!
//! Serves canned addresses and area codes, records every call, and can be
//! told to fail for specific area codes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::{Cep, Ddd, Uf, normalize_city};

use super::error::{LookupError, Upstream};
use super::source::{AddressSource, AreaCodeSource};
use super::types::{Address, AreaCodeInfo};

/// A call made to the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Cep(Cep),
    Street { uf: Uf, city: String, street: String },
    AreaCode(Ddd),
}

#[derive(Default)]
struct MockState {
    addresses: HashMap<String, Address>,
    streets: HashMap<(String, String, String), Vec<Address>>,
    area_codes: HashMap<Ddd, AreaCodeInfo>,
    failures: HashMap<Ddd, LookupError>,
    calls: Vec<MockCall>,
}

/// Mock implementing both [`AddressSource`] and [`AreaCodeSource`].
///
/// Clones share state, so a test can keep one clone to inspect calls after
/// handing another to a `LookupClient`.
#[derive(Clone, Default)]
pub struct MockLookup {
    state: Arc<Mutex<MockState>>,
}

impl MockLookup {
    /// Create an empty mock: every postal code is unknown, every street
    /// search is empty, every area code answers 404.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Serve an address for a postal code (8 bare digits).
    pub fn with_address(self, cep: &str, address: Address) -> Self {
        self.lock().addresses.insert(cep.to_string(), address);
        self
    }

    /// Serve addresses for a street search. City and street match
    /// accent- and case-insensitively.
    pub fn with_street_results(
        self,
        uf: &str,
        city: &str,
        street: &str,
        addresses: Vec<Address>,
    ) -> Self {
        self.lock().streets.insert(
            (uf.to_string(), normalize_city(city), normalize_city(street)),
            addresses,
        );
        self
    }

    /// Serve an area code.
    pub fn with_area_code(self, ddd: Ddd, state: &str, cities: &[&str]) -> Self {
        self.lock().area_codes.insert(
            ddd,
            AreaCodeInfo {
                state: state.to_string(),
                cities: cities.iter().map(|c| c.to_string()).collect(),
            },
        );
        self
    }

    /// Fail every lookup of an area code with the given error.
    pub fn with_area_code_failure(self, ddd: Ddd, error: LookupError) -> Self {
        self.lock().failures.insert(ddd, error);
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Number of lookups of one area code.
    pub fn area_code_calls(&self, ddd: Ddd) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| **c == MockCall::AreaCode(ddd))
            .count()
    }
}

#[async_trait]
impl AddressSource for MockLookup {
    async fn address_by_cep(&self, cep: &Cep) -> Result<Option<Address>, LookupError> {
        let mut state = self.lock();
        state.calls.push(MockCall::Cep(*cep));
        Ok(state.addresses.get(cep.as_str()).cloned())
    }

    async fn addresses_by_street(
        &self,
        uf: Uf,
        city: &str,
        street: &str,
    ) -> Result<Vec<Address>, LookupError> {
        let mut state = self.lock();
        state.calls.push(MockCall::Street {
            uf,
            city: city.to_string(),
            street: street.to_string(),
        });
        let key = (uf.to_string(), normalize_city(city), normalize_city(street));
        Ok(state.streets.get(&key).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl AreaCodeSource for MockLookup {
    async fn area_code(&self, ddd: Ddd) -> Result<AreaCodeInfo, LookupError> {
        let mut state = self.lock();
        state.calls.push(MockCall::AreaCode(ddd));

        if let Some(err) = state.failures.get(&ddd) {
            return Err(err.clone());
        }

        state
            .area_codes
            .get(&ddd)
            .cloned()
            .ok_or_else(|| LookupError::Service {
                upstream: Upstream::BrasilApi,
                status: 404,
                body: format!("DDD {ddd} não encontrado"),
            })
    }
}
